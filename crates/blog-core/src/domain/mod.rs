//! Domain entities - the core business objects.

mod author;
mod id;
mod post;

pub use author::{Author, AuthorSnapshot};
pub use id::DocumentId;
pub use post::{EditablePost, Post, PostContent, PostDetail, PostDraft, PostListing};
