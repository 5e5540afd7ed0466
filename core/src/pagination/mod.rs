mod paginator;
mod window;

use thiserror::Error;

pub use paginator::{
    page_url, total_pages, OutOfRange, Page, PageLink, PageLinks, PageRequest, PageSlot,
    Paginator, DEFAULT_PAGE_SIZE,
};
pub use window::{compute_window, WindowResult, DEFAULT_RADIUS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Page {page} out of range, total pages: {total_pages}")]
    OutOfRange { page: u64, total_pages: u64 },
}
