//! Data Transfer Objects - form bodies submitted by the browser.

use serde::{Deserialize, Serialize};

use blog_core::domain::PostContent;

/// Form submitted to create a post. `author` is the raw author ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostForm {
    pub author: String,
    pub title: String,
    pub summary: String,
    pub content: String,
}

/// Form submitted to edit a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostForm {
    pub title: String,
    pub summary: String,
    pub content: String,
}

impl CreatePostForm {
    /// Split into the raw author ID and the post content.
    pub fn into_parts(self) -> (String, PostContent) {
        (
            self.author,
            PostContent {
                title: self.title,
                summary: self.summary,
                body: self.content,
            },
        )
    }
}

impl From<UpdatePostForm> for PostContent {
    fn from(form: UpdatePostForm) -> Self {
        Self {
            title: form.title,
            summary: form.summary,
            body: form.content,
        }
    }
}
