//! Page chrome shared by every authenticated page.

use crate::components::sidebar::{SidebarLink, sidebar};
use crate::models::CurrentAdmin;
use crate::services::{Notification, Notifier};

/// Navbar, sidebar and toast area around a routed page.
#[derive(Debug, Clone)]
pub struct Shell {
    pub title: String,
    pub admin_email: String,
    pub current_path: String,
    pub nav: Vec<SidebarLink>,
    pub notifications: Vec<Notification>,
}

impl Shell {
    /// Build the shell for `path`, draining any queued toasts.
    pub async fn load(
        title: impl Into<String>,
        path: &str,
        admin: &CurrentAdmin,
        notifier: &Notifier,
    ) -> Self {
        Self {
            title: title.into(),
            admin_email: admin.email.to_string(),
            current_path: path.to_string(),
            nav: sidebar(path),
            notifications: notifier.drain().await,
        }
    }
}
