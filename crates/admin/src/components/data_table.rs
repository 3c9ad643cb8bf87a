//! Data table component types.
//!
//! Column headers, search box and empty state for the read-only tables
//! (users, invoices).

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: &'static str,
    /// Display label for the column header.
    pub label: &'static str,
    /// Right-align numeric columns.
    pub numeric: bool,
}

impl TableColumn {
    /// Create a text column.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            numeric: false,
        }
    }

    /// Create a right-aligned numeric column.
    #[must_use]
    pub const fn numeric(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            numeric: true,
        }
    }

    /// Header alignment class.
    #[must_use]
    pub const fn align_class(&self) -> &'static str {
        if self.numeric { "text-right" } else { "text-left" }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: &'static str,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Search placeholder text, `None` hides the search box.
    pub search_placeholder: Option<&'static str>,
    /// Icon for empty state.
    pub empty_icon: &'static str,
    /// Title for empty state.
    pub empty_title: &'static str,
    /// Description for empty state.
    pub empty_description: Option<&'static str>,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub const fn new(table_id: &'static str) -> Self {
        Self {
            table_id,
            columns: Vec::new(),
            search_placeholder: None,
            empty_icon: "ph-list",
            empty_title: "No items found",
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Show a search box.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &'static str) -> Self {
        self.search_placeholder = Some(placeholder);
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(
        mut self,
        icon: &'static str,
        title: &'static str,
        description: Option<&'static str>,
    ) -> Self {
        self.empty_icon = icon;
        self.empty_title = title;
        self.empty_description = description;
        self
    }

    /// Number of columns, for `colspan` on empty rows.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// Build the users table configuration.
#[must_use]
pub fn users_table_config() -> DataTableConfig {
    DataTableConfig::new("users")
        .column(TableColumn::new("index", "#"))
        .column(TableColumn::new("name", "Name"))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::new("phone", "Phone"))
        .column(TableColumn::new("joined", "Joined"))
        .empty_state("ph-users", "No users found", None)
}

/// Build the invoices table configuration.
#[must_use]
pub fn invoices_table_config() -> DataTableConfig {
    DataTableConfig::new("invoices")
        .column(TableColumn::new("invoice", "Invoice"))
        .column(TableColumn::new("customer", "Customer"))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::numeric("amount", "Amount"))
        .column(TableColumn::new("date", "Date"))
        .column(TableColumn::new("download", ""))
        .search_placeholder("Search by customer name or email...")
        .empty_state(
            "ph-file-text",
            "No invoices found",
            Some("Try a different name or email"),
        )
}
