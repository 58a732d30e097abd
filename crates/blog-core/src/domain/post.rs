use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, AuthorSnapshot, DocumentId};

/// Post entity - a blog post with an embedded author snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: DocumentId,
    pub title: String,
    pub summary: String,
    pub body: String,
    /// Creation time, or time of the last edit.
    pub date: DateTime<Utc>,
    pub author: AuthorSnapshot,
}

/// A post that has not been stored yet, so it has no ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub author: AuthorSnapshot,
}

impl PostDraft {
    /// Draft a post written by `author`, stamped with the current time.
    pub fn new(author: &Author, content: PostContent) -> Self {
        Self {
            title: content.title,
            summary: content.summary,
            body: content.body,
            date: Utc::now(),
            author: AuthorSnapshot::from(author),
        }
    }

    /// The stored post, once the store has assigned `id`.
    pub fn into_post(self, id: DocumentId) -> Post {
        Post {
            id,
            title: self.title,
            summary: self.summary,
            body: self.body,
            date: self.date,
            author: self.author,
        }
    }
}

/// The user-editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostContent {
    pub title: String,
    pub summary: String,
    pub body: String,
}

/// List projection: title, summary and author name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostListing {
    pub id: DocumentId,
    pub title: String,
    pub summary: String,
    pub author_name: String,
}

/// Detail projection: everything except the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: DocumentId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub author: AuthorSnapshot,
}

/// Edit projection: everything except the author snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditablePost {
    pub id: DocumentId,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub date: DateTime<Utc>,
}

impl From<&Post> for PostListing {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            summary: post.summary.clone(),
            author_name: post.author.name.clone(),
        }
    }
}

impl From<&Post> for PostDetail {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            date: post.date,
            author: post.author.clone(),
        }
    }
}

impl From<&Post> for EditablePost {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            summary: post.summary.clone(),
            body: post.body.clone(),
            date: post.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> DocumentId {
        DocumentId::parse(raw).unwrap()
    }

    fn author() -> Author {
        Author {
            id: id("65a4f1c2e4b0a1b2c3d4e5f6"),
            name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
        }
    }

    #[test]
    fn test_draft_copies_author() {
        let mut author = author();
        let post = PostDraft::new(
            &author,
            PostContent {
                title: "T".into(),
                summary: "S".into(),
                body: "B".into(),
            },
        )
        .into_post(id("65a4f1c2e4b0a1b2c3d4e5f7"));

        author.name = "Lee".to_string();

        assert_eq!(post.author.id, author.id);
        assert_eq!(post.author.name, "Kim");
        assert_eq!(post.author.email, "kim@example.com");
        assert_eq!(post.body, "B");
        assert_eq!(post.id, id("65a4f1c2e4b0a1b2c3d4e5f7"));
    }

    #[test]
    fn test_projections() {
        let post = PostDraft::new(&author(), PostContent::default())
            .into_post(id("65a4f1c2e4b0a1b2c3d4e5f7"));

        let listing = PostListing::from(&post);
        assert_eq!(listing.author_name, "Kim");

        let detail = PostDetail::from(&post);
        assert_eq!(detail.author, post.author);
        assert_eq!(detail.date, post.date);

        let editable = EditablePost::from(&post);
        assert_eq!(editable.summary, post.summary);
    }
}
