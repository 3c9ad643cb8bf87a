//! Sidebar navigation.

/// A destination in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    /// Phosphor icon class.
    pub icon: &'static str,
}

/// Sidebar entries, in display order.
pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem {
        href: "/add",
        label: "Add Items",
        icon: "ph-plus-circle",
    },
    NavItem {
        href: "/list",
        label: "List Items",
        icon: "ph-list-bullets",
    },
    NavItem {
        href: "/orders",
        label: "Orders",
        icon: "ph-package",
    },
    NavItem {
        href: "/users",
        label: "All Users",
        icon: "ph-users",
    },
    NavItem {
        href: "/analysis",
        label: "Analysis",
        icon: "ph-chart-line-up",
    },
    NavItem {
        href: "/hero",
        label: "Upload Home",
        icon: "ph-house-line",
    },
    NavItem {
        href: "/about",
        label: "Upload About",
        icon: "ph-info",
    },
    NavItem {
        href: "/invoice",
        label: "All Invoices",
        icon: "ph-file-text",
    },
];

/// A sidebar entry resolved against the current path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

impl SidebarLink {
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        if self.active {
            "bg-gray-900 text-white"
        } else {
            "text-gray-600 hover:bg-gray-100"
        }
    }
}

/// Whether `href` owns `path`: an exact match or a sub-path of it.
#[must_use]
pub fn is_active(href: &str, path: &str) -> bool {
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Sidebar links with the active entry marked.
#[must_use]
pub fn sidebar(current_path: &str) -> Vec<SidebarLink> {
    NAV_ITEMS
        .iter()
        .map(|item| SidebarLink {
            href: item.href,
            label: item.label,
            icon: item.icon,
            active: is_active(item.href, current_path),
        })
        .collect()
}
