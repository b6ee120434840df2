// Post domain module
// Contains the post entity and the pagination window used to list posts

#![allow(clippy::module_inception)]

pub mod pagination;
pub mod post;

pub use pagination::PageRange;
pub use post::{EmptyPost, NewPost, Post};
