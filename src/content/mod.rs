//! Content module - display models for the index page

mod post;

pub use post::{Post, PostData, PostPagination};
