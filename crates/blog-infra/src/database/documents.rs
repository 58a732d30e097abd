//! BSON document shapes of the `authors` and `posts` collections.
//!
//! One struct per projection, so a projected query deserializes into exactly
//! the fields it asked for.

use bson::oid::ObjectId;
use bson::{DateTime, Document, doc};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use blog_core::domain::{
    Author, AuthorSnapshot, DocumentId, EditablePost, PostContent, PostDetail, PostDraft,
    PostListing,
};

pub(crate) const AUTHORS: &str = "authors";
pub(crate) const POSTS: &str = "posts";

pub(crate) fn object_id(id: DocumentId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

pub(crate) fn document_id(oid: ObjectId) -> DocumentId {
    DocumentId::from_bytes(oid.bytes())
}

pub(crate) fn by_id(id: DocumentId) -> Document {
    doc! { "_id": object_id(id) }
}

/// Projection for the post list.
pub(crate) fn listing_projection() -> Document {
    doc! { "title": 1, "summary": 1, "author.name": 1 }
}

/// Projection for the detail page.
pub(crate) fn detail_projection() -> Document {
    doc! { "summary": 0 }
}

/// Projection for the edit form.
pub(crate) fn editable_projection() -> Document {
    doc! { "author": 0 }
}

/// Partial update touching only the editable fields and the date.
pub(crate) fn content_update(content: PostContent, date: chrono::DateTime<Utc>) -> Document {
    doc! {
        "$set": {
            "title": content.title,
            "summary": content.summary,
            "body": content.body,
            "date": DateTime::from_chrono(date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AuthorDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
}

impl From<AuthorDocument> for Author {
    fn from(doc: AuthorDocument) -> Self {
        Self {
            id: document_id(doc.id),
            name: doc.name,
            email: doc.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AuthorSnapshotDocument {
    pub id: ObjectId,
    pub name: String,
    pub email: String,
}

impl From<AuthorSnapshot> for AuthorSnapshotDocument {
    fn from(snapshot: AuthorSnapshot) -> Self {
        Self {
            id: object_id(snapshot.id),
            name: snapshot.name,
            email: snapshot.email,
        }
    }
}

impl From<AuthorSnapshotDocument> for AuthorSnapshot {
    fn from(doc: AuthorSnapshotDocument) -> Self {
        Self {
            id: document_id(doc.id),
            name: doc.name,
            email: doc.email,
        }
    }
}

/// Full post document, as inserted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub date: DateTime,
    pub author: AuthorSnapshotDocument,
}

impl PostDocument {
    pub fn new(id: ObjectId, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            summary: draft.summary,
            body: draft.body,
            date: DateTime::from_chrono(draft.date),
            author: draft.author.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthorNameDocument {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PostListingDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub summary: String,
    pub author: AuthorNameDocument,
}

impl From<PostListingDocument> for PostListing {
    fn from(doc: PostListingDocument) -> Self {
        Self {
            id: document_id(doc.id),
            title: doc.title,
            summary: doc.summary,
            author_name: doc.author.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PostDetailDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub body: String,
    pub date: DateTime,
    pub author: AuthorSnapshotDocument,
}

impl From<PostDetailDocument> for PostDetail {
    fn from(doc: PostDetailDocument) -> Self {
        Self {
            id: document_id(doc.id),
            title: doc.title,
            body: doc.body,
            date: doc.date.to_chrono(),
            author: doc.author.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EditablePostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub date: DateTime,
}

impl From<EditablePostDocument> for EditablePost {
    fn from(doc: EditablePostDocument) -> Self {
        Self {
            id: document_id(doc.id),
            title: doc.title,
            summary: doc.summary,
            body: doc.body,
            date: doc.date.to_chrono(),
        }
    }
}
