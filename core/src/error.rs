use thiserror::Error;

use crate::pagination::PaginationError;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error("Not Found")]
    NotFound,
}

pub type Result<T, E = BlogError> = std::result::Result<T, E>;
