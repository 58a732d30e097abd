use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Author, DocumentId};
use blog_core::error::RepoError;
use blog_core::ports::AuthorRepository;

/// In-memory `authors` collection, kept in insertion order.
pub struct InMemoryAuthorRepository {
    authors: RwLock<Vec<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::with_authors(Vec::new())
    }

    pub fn with_authors(authors: Vec<Author>) -> Self {
        Self {
            authors: RwLock::new(authors),
        }
    }

    /// Insert an author, or replace the one with the same ID.
    ///
    /// Authors are never written through the blog routes; this exists for
    /// seeding.
    pub async fn upsert(&self, author: Author) {
        let mut authors = self.authors.write().await;
        match authors.iter_mut().find(|a| a.id == author.id) {
            Some(existing) => *existing = author,
            None => authors.push(author),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.authors.read().await.clone())
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Author>, RepoError> {
        let authors = self.authors.read().await;
        Ok(authors.iter().find(|a| a.id == id).cloned())
    }
}
