use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use blog_core::domain::{
    DocumentId, EditablePost, Post, PostContent, PostDetail, PostDraft, PostListing,
};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use crate::ids::new_document_id;

/// In-memory `posts` collection, kept in insertion order.
///
/// Projections and zero-match behavior follow the MongoDB repository.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// The full stored post, unprojected.
    pub async fn get(&self, id: DocumentId) -> Option<Post> {
        let posts = self.posts.read().await;
        posts.iter().find(|p| p.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<PostListing>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().map(PostListing::from).collect())
    }

    async fn find_detail(&self, id: DocumentId) -> Result<Option<PostDetail>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).map(PostDetail::from))
    }

    async fn find_editable(&self, id: DocumentId) -> Result<Option<EditablePost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).map(EditablePost::from))
    }

    async fn insert(&self, draft: PostDraft) -> Result<DocumentId, RepoError> {
        let id = new_document_id();
        self.posts.write().await.push(draft.into_post(id));
        tracing::debug!(post_id = %id, "Post inserted");
        Ok(id)
    }

    async fn update_content(
        &self,
        id: DocumentId,
        content: PostContent,
        date: DateTime<Utc>,
    ) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(0);
        };

        post.title = content.title;
        post.summary = content.summary;
        post.body = content.body;
        post.date = date;
        Ok(1)
    }

    async fn delete(&self, id: DocumentId) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok((before - posts.len()) as u64)
    }
}
