use blog_core::pagination::PaginationError;
use blog_core::BlogError;
use hyper::StatusCode;
use thiserror::Error;

pub use crate::http::error::HttpError;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Response build error: {0}")]
    Response(#[from] hyper::http::Error),
    #[error("No such post: {0}")]
    NoSuchPost(String),
    #[error("No such category: {0}")]
    NoSuchCategory(String),
    #[error("No such tag: {0}")]
    NoSuchTag(String),
    #[error("Wrong id: {0}")]
    WrongId(String),
    #[error("Wrong archive date: {0}")]
    WrongDate(String),
    #[error("Page {page} not found, total pages: {total_pages}")]
    PageNotFound { page: u64, total_pages: u64 },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Missing fields: {0}")]
    MissingFields(String),
    #[error("Not found")]
    NotFound,
}

impl ProcessError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProcessError::NoSuchPost(_)
            | ProcessError::NoSuchCategory(_)
            | ProcessError::NoSuchTag(_)
            | ProcessError::PageNotFound { .. }
            | ProcessError::NotFound => StatusCode::NOT_FOUND,
            ProcessError::WrongId(_)
            | ProcessError::WrongDate(_)
            | ProcessError::InvalidArgument(_)
            | ProcessError::BadRequest(_)
            | ProcessError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ProcessError::Http(HttpError::TooLarge(_)) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PaginationError> for ProcessError {
    fn from(e: PaginationError) -> Self {
        match e {
            PaginationError::OutOfRange { page, total_pages } => {
                ProcessError::PageNotFound { page, total_pages }
            }
            PaginationError::InvalidArgument(s) => ProcessError::InvalidArgument(s),
        }
    }
}

impl From<BlogError> for ProcessError {
    fn from(e: BlogError) -> Self {
        match e {
            BlogError::Internal(e) => ProcessError::Internal(e),
            BlogError::Db(e) => ProcessError::Db(e),
            BlogError::Pagination(e) => e.into(),
            BlogError::NotFound => ProcessError::NotFound,
        }
    }
}
