use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Body larger than {0} bytes")]
    TooLarge(usize),
    #[error("Body read error: {0}")]
    Body(String),
}
