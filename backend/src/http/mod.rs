pub mod body_type;
pub mod error;
