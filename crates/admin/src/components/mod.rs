//! View components shared by the page templates.

pub mod calendar;
pub mod charts;
pub mod data_table;
pub mod layout;
pub mod sidebar;

pub use data_table::{DataTableConfig, TableColumn};
pub use layout::Shell;
pub use sidebar::{SidebarLink, sidebar};
