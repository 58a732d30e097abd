//! # Blog Shared
//!
//! Types that cross the HTTP boundary: submitted forms, the view-models handed
//! to templates, and the date formats shown to readers.

pub mod dto;
pub mod format;
pub mod views;

pub use views::{AuthorOption, EditPostView, ErrorPage, PostDetailView, PostListItem};
