pub mod category;
pub mod tag;
pub mod user;

pub mod post;
pub mod comment;

pub mod rel_post_tag;
