pub mod error;
pub mod model;
pub mod pagination;
pub mod source;
pub mod text;

pub use error::{BlogError, Result};
