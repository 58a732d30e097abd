//! View-models handed to the template renderer.

use std::fmt::Display;

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use blog_core::domain::{Author, EditablePost, PostDetail, PostListing};

use crate::format::{iso_timestamp, korean_long_date};

/// One row of the post list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub author_name: String,
}

impl From<PostListing> for PostListItem {
    fn from(post: PostListing) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            summary: post.summary,
            author_name: post.author_name,
        }
    }
}

/// One entry of the author picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorOption {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<Author> for AuthorOption {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name,
            email: author.email,
        }
    }
}

/// Post detail page. `date` is ISO-8601; `human_readable_date` is the long
/// Korean form of the same instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub human_readable_date: String,
    pub author_name: String,
    pub author_email: String,
}

impl PostDetailView {
    pub fn new<Tz>(post: PostDetail, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: post.id.to_string(),
            title: post.title,
            body: post.body,
            date: iso_timestamp(post.date),
            human_readable_date: korean_long_date(post.date, tz),
            author_name: post.author.name,
            author_email: post.author.email,
        }
    }
}

/// Edit form, pre-filled with the stored fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPostView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub body: String,
}

impl From<EditablePost> for EditPostView {
    fn from(post: EditablePost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            summary: post.summary,
            body: post.body,
        }
    }
}

/// Generic error page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPage {
    pub status: u16,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorPage {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
