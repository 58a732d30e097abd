//! Application services - the operations behind each blog route.

mod posts;

pub use posts::{NewPost, PostService};
