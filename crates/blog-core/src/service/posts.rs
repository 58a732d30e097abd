use std::sync::Arc;

use chrono::Utc;

use crate::domain::{
    Author, DocumentId, EditablePost, Post, PostContent, PostDetail, PostDraft, PostListing,
};
use crate::error::DomainError;
use crate::ports::{AuthorRepository, PostRepository};

/// Input for creating a post: the raw author ID from the form plus content.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: String,
    pub content: PostContent,
}

/// Post operations over the injected repositories.
///
/// Every ID-taking operation parses its raw identifier first and fails with
/// [`DomainError::InvalidIdentifier`] before touching the store.
#[derive(Clone)]
pub struct PostService {
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(authors: Arc<dyn AuthorRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { authors, posts }
    }

    /// All posts for the list page.
    pub async fn list_posts(&self) -> Result<Vec<PostListing>, DomainError> {
        Ok(self.posts.list().await?)
    }

    /// All authors, for the author picker on the new-post form.
    pub async fn list_authors(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.authors.find_all().await?)
    }

    /// Create a post, embedding a snapshot of the author as it is right now.
    ///
    /// The author lookup and the insert are two separate store calls.
    pub async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let author_id = DocumentId::parse(&input.author_id)?;

        let author = self
            .authors
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UnknownAuthor(author_id))?;

        let draft = PostDraft::new(&author, input.content);
        let id = self.posts.insert(draft.clone()).await?;
        tracing::info!(post_id = %id, author_id = %author_id, "Post created");

        Ok(draft.into_post(id))
    }

    /// A single post for the detail page.
    pub async fn get_post(&self, raw_id: &str) -> Result<PostDetail, DomainError> {
        let id = DocumentId::parse(raw_id)?;
        self.posts
            .find_detail(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// A single post for the edit form.
    pub async fn get_editable_post(&self, raw_id: &str) -> Result<EditablePost, DomainError> {
        let id = DocumentId::parse(raw_id)?;
        self.posts
            .find_editable(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// Replace the editable fields and reset the date.
    ///
    /// Returns whether a post matched; a miss is not an error.
    pub async fn update_post(
        &self,
        raw_id: &str,
        content: PostContent,
    ) -> Result<bool, DomainError> {
        let id = DocumentId::parse(raw_id)?;
        let matched = self.posts.update_content(id, content, Utc::now()).await?;
        if matched == 0 {
            tracing::debug!(post_id = %id, "Update matched no post");
        }
        Ok(matched > 0)
    }

    /// Delete a post. Returns whether a post was deleted; a miss is not an error.
    pub async fn delete_post(&self, raw_id: &str) -> Result<bool, DomainError> {
        let id = DocumentId::parse(raw_id)?;
        let deleted = self.posts.delete(id).await?;
        if deleted == 0 {
            tracing::debug!(post_id = %id, "Delete matched no post");
        }
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::DateTime;

    use super::*;
    use crate::error::RepoError;

    /// Store double that fails the test if it is ever reached.
    struct UnreachableStore;

    #[async_trait]
    impl AuthorRepository for UnreachableStore {
        async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
            panic!("store must not be queried")
        }

        async fn find_by_id(&self, _id: DocumentId) -> Result<Option<Author>, RepoError> {
            panic!("store must not be queried")
        }
    }

    #[async_trait]
    impl PostRepository for UnreachableStore {
        async fn list(&self) -> Result<Vec<PostListing>, RepoError> {
            panic!("store must not be queried")
        }

        async fn find_detail(&self, _id: DocumentId) -> Result<Option<PostDetail>, RepoError> {
            panic!("store must not be queried")
        }

        async fn find_editable(&self, _id: DocumentId) -> Result<Option<EditablePost>, RepoError> {
            panic!("store must not be queried")
        }

        async fn insert(&self, _draft: PostDraft) -> Result<DocumentId, RepoError> {
            panic!("store must not be queried")
        }

        async fn update_content(
            &self,
            _id: DocumentId,
            _content: PostContent,
            _date: DateTime<Utc>,
        ) -> Result<u64, RepoError> {
            panic!("store must not be queried")
        }

        async fn delete(&self, _id: DocumentId) -> Result<u64, RepoError> {
            panic!("store must not be queried")
        }
    }

    fn service() -> PostService {
        PostService::new(Arc::new(UnreachableStore), Arc::new(UnreachableStore))
    }

    fn is_invalid_id<T>(result: Result<T, DomainError>) -> bool {
        matches!(result, Err(DomainError::InvalidIdentifier(ref raw)) if raw == "not-an-id")
    }

    #[tokio::test]
    async fn test_malformed_ids_fail_before_store_access() {
        let service = service();

        assert!(is_invalid_id(service.get_post("not-an-id").await));
        assert!(is_invalid_id(service.get_editable_post("not-an-id").await));
        assert!(is_invalid_id(
            service
                .update_post("not-an-id", PostContent::default())
                .await
        ));
        assert!(is_invalid_id(service.delete_post("not-an-id").await));
        assert!(is_invalid_id(
            service
                .create_post(NewPost {
                    author_id: "not-an-id".to_string(),
                    content: PostContent::default(),
                })
                .await
        ));
    }
}
