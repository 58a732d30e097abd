use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    Author, DocumentId, EditablePost, PostContent, PostDetail, PostDraft, PostListing,
};
use crate::error::RepoError;

/// Read access to the `authors` collection.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// All authors, unprojected, in store order.
    async fn find_all(&self) -> Result<Vec<Author>, RepoError>;

    /// Find an author by its unique ID.
    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Author>, RepoError>;
}

/// Post repository over the `posts` collection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts projected to title, summary and author name, in store order.
    async fn list(&self) -> Result<Vec<PostListing>, RepoError>;

    /// Find a post with its summary left out.
    async fn find_detail(&self, id: DocumentId) -> Result<Option<PostDetail>, RepoError>;

    /// Find a post with its author snapshot left out.
    async fn find_editable(&self, id: DocumentId) -> Result<Option<EditablePost>, RepoError>;

    /// Insert a new post, returning the ID the store assigned to it.
    async fn insert(&self, draft: PostDraft) -> Result<DocumentId, RepoError>;

    /// Overwrite title, summary, body and date of the matching post.
    /// Returns the number of matched posts (0 or 1).
    async fn update_content(
        &self,
        id: DocumentId,
        content: PostContent,
        date: DateTime<Utc>,
    ) -> Result<u64, RepoError>;

    /// Delete the matching post. Returns the number of deleted posts (0 or 1).
    async fn delete(&self, id: DocumentId) -> Result<u64, RepoError>;
}
