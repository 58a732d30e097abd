//! MongoDB repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::ErrorKind;
use mongodb::{Collection, Database};

use blog_core::domain::{
    Author, DocumentId, EditablePost, PostContent, PostDetail, PostDraft, PostListing,
};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, PostRepository};

use super::documents::{
    AUTHORS, AuthorDocument, EditablePostDocument, POSTS, PostDetailDocument, PostDocument,
    PostListingDocument, by_id, content_update, detail_projection, document_id,
    editable_projection, listing_projection,
};

/// Documents that do not match the expected shape surface as `Decode`.
fn query_error(e: mongodb::error::Error) -> RepoError {
    match *e.kind {
        ErrorKind::BsonDeserialization(ref err) => RepoError::Decode(err.to_string()),
        _ => RepoError::Query(e.to_string()),
    }
}

/// MongoDB author repository over the `authors` collection.
#[derive(Clone)]
pub struct MongoAuthorRepository {
    authors: Collection<AuthorDocument>,
}

impl MongoAuthorRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            authors: db.collection(AUTHORS),
        }
    }
}

#[async_trait]
impl AuthorRepository for MongoAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        let documents: Vec<AuthorDocument> = self
            .authors
            .find(doc! {})
            .await
            .map_err(query_error)?
            .try_collect()
            .await
            .map_err(query_error)?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Author>, RepoError> {
        tracing::debug!(author_id = %id, "Finding author by id");

        let result = self
            .authors
            .find_one(by_id(id))
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }
}

/// MongoDB post repository over the `posts` collection.
#[derive(Clone)]
pub struct MongoPostRepository {
    posts: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            posts: db.collection(POSTS),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn list(&self) -> Result<Vec<PostListing>, RepoError> {
        let documents: Vec<PostListingDocument> = self
            .posts
            .clone_with_type::<PostListingDocument>()
            .find(doc! {})
            .projection(listing_projection())
            .await
            .map_err(query_error)?
            .try_collect()
            .await
            .map_err(query_error)?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_detail(&self, id: DocumentId) -> Result<Option<PostDetail>, RepoError> {
        let result = self
            .posts
            .clone_with_type::<PostDetailDocument>()
            .find_one(by_id(id))
            .projection(detail_projection())
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_editable(&self, id: DocumentId) -> Result<Option<EditablePost>, RepoError> {
        let result = self
            .posts
            .clone_with_type::<EditablePostDocument>()
            .find_one(by_id(id))
            .projection(editable_projection())
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, draft: PostDraft) -> Result<DocumentId, RepoError> {
        let oid = ObjectId::new();
        let document = PostDocument::new(oid, draft);

        let result = self
            .posts
            .insert_one(&document)
            .await
            .map_err(query_error)?;
        tracing::debug!(inserted_id = %result.inserted_id, "Post inserted");

        Ok(document_id(oid))
    }

    async fn update_content(
        &self,
        id: DocumentId,
        content: PostContent,
        date: DateTime<Utc>,
    ) -> Result<u64, RepoError> {
        let result = self
            .posts
            .update_one(by_id(id), content_update(content, date))
            .await
            .map_err(query_error)?;
        tracing::debug!(post_id = %id, matched = result.matched_count, "Post updated");

        Ok(result.matched_count)
    }

    async fn delete(&self, id: DocumentId) -> Result<u64, RepoError> {
        let result = self
            .posts
            .delete_one(by_id(id))
            .await
            .map_err(query_error)?;
        tracing::debug!(post_id = %id, deleted = result.deleted_count, "Post deleted");

        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_document_is_decode_error() {
        let err = mongodb::bson::from_document::<AuthorDocument>(doc! { "name": 1 }).unwrap_err();

        let mapped = query_error(mongodb::error::Error::from(err));
        assert!(matches!(mapped, RepoError::Decode(_)), "got {mapped:?}");
    }

    #[test]
    fn test_other_driver_errors_are_query_errors() {
        let err = mongodb::error::Error::custom("server went away");

        assert!(matches!(query_error(err), RepoError::Query(_)));
    }
}
