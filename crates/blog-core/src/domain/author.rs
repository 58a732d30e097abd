use serde::{Deserialize, Serialize};

use super::DocumentId;

/// Author entity - read-only from the blog's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: DocumentId,
    pub name: String,
    pub email: String,
}

/// Copy of an author embedded in a post at creation time.
///
/// Never re-synced: later changes to the author record do not reach posts
/// that were already written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    pub id: DocumentId,
    pub name: String,
    pub email: String,
}

impl From<&Author> for AuthorSnapshot {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
            email: author.email.clone(),
        }
    }
}
