pub mod header;
pub mod sidebar;

pub use header::AppHeader;
pub use sidebar::AppSidebar;
