pub mod comment;
pub mod detail;
pub mod listing;
pub mod pagination;
pub mod process_http;
pub mod sidebar;
