use std::sync::Arc;

use blog_core::domain::{Author, DocumentId, PostContent};
use blog_core::ports::AuthorRepository;
use blog_core::service::NewPost;
use blog_core::{DomainError, PostService};
use chrono::Utc;

use super::{InMemoryAuthorRepository, InMemoryPostRepository};
use crate::new_document_id;

struct Fixture {
    authors: Arc<InMemoryAuthorRepository>,
    posts: Arc<InMemoryPostRepository>,
    service: PostService,
    author: Author,
}

fn fixture() -> Fixture {
    let author = Author {
        id: new_document_id(),
        name: "Kim".to_string(),
        email: "kim@example.com".to_string(),
    };
    let authors = Arc::new(InMemoryAuthorRepository::with_authors(vec![author.clone()]));
    let posts = Arc::new(InMemoryPostRepository::new());
    let service = PostService::new(authors.clone(), posts.clone());

    Fixture {
        authors,
        posts,
        service,
        author,
    }
}

fn content(title: &str) -> PostContent {
    PostContent {
        title: title.to_string(),
        summary: format!("{title} summary"),
        body: format!("{title} body"),
    }
}

async fn create(f: &Fixture, title: &str) -> DocumentId {
    f.service
        .create_post(NewPost {
            author_id: f.author.id.to_string(),
            content: content(title),
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_create_stores_author_snapshot() {
    let f = fixture();
    let before = Utc::now();
    let id = create(&f, "T").await;

    let stored = f.posts.get(id).await.unwrap();
    assert_eq!(stored.title, "T");
    assert_eq!(stored.body, "T body");
    assert_eq!(stored.author.id, f.author.id);
    assert_eq!(stored.author.name, f.author.name);
    assert_eq!(stored.author.email, f.author.email);
    assert!(stored.date >= before && stored.date <= Utc::now());
}

#[tokio::test]
async fn test_snapshot_ignores_later_author_changes() {
    let f = fixture();
    let id = create(&f, "T").await;

    f.authors
        .upsert(Author {
            name: "Lee".to_string(),
            email: "lee@example.com".to_string(),
            ..f.author.clone()
        })
        .await;

    let detail = f.service.get_post(&id.to_string()).await.unwrap();
    assert_eq!(detail.author.name, "Kim");
    assert_eq!(detail.author.email, "kim@example.com");
}

#[tokio::test]
async fn test_create_with_unknown_author() {
    let f = fixture();
    let missing = new_document_id();

    let result = f
        .service
        .create_post(NewPost {
            author_id: missing.to_string(),
            content: content("T"),
        })
        .await;

    assert!(matches!(result, Err(DomainError::UnknownAuthor(id)) if id == missing));
    assert!(f.posts.is_empty().await);
}

#[tokio::test]
async fn test_update_keeps_author_snapshot() {
    let f = fixture();
    let id = create(&f, "T").await;
    let original = f.posts.get(id).await.unwrap();

    let matched = f
        .service
        .update_post(&id.to_string(), content("T2"))
        .await
        .unwrap();
    assert!(matched);

    let updated = f.posts.get(id).await.unwrap();
    assert_eq!(updated.title, "T2");
    assert_eq!(updated.summary, "T2 summary");
    assert_eq!(updated.body, "T2 body");
    assert_eq!(updated.author, original.author);
    assert!(updated.date >= original.date);
}

#[tokio::test]
async fn test_update_and_delete_missing_post_are_silent() {
    let f = fixture();
    let missing = new_document_id().to_string();

    assert!(!f.service.update_post(&missing, content("T")).await.unwrap());
    assert!(!f.service.delete_post(&missing).await.unwrap());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let f = fixture();
    let id = create(&f, "T").await;

    assert!(f.service.delete_post(&id.to_string()).await.unwrap());

    let result = f.service.get_post(&id.to_string()).await;
    assert!(matches!(result, Err(DomainError::NotFound { id: missing, .. }) if missing == id));
    assert_eq!(f.authors.find_all().await.unwrap(), vec![f.author.clone()]);
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let f = fixture();
    create(&f, "first").await;
    create(&f, "second").await;

    let titles: Vec<String> = f
        .service
        .list_posts()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["first", "second"]);
}

#[tokio::test]
async fn test_editable_post_includes_summary() {
    let f = fixture();
    let id = create(&f, "T").await;

    let editable = f.service.get_editable_post(&id.to_string()).await.unwrap();
    assert_eq!(editable.summary, "T summary");
    assert_eq!(editable.body, "T body");
}

#[tokio::test]
async fn test_insert_assigns_distinct_ids() {
    let f = fixture();
    let first = create(&f, "first").await;
    let second = create(&f, "second").await;

    assert_ne!(first, second);
    assert_eq!(f.posts.get(first).await.unwrap().title, "first");
    assert_eq!(f.posts.get(second).await.unwrap().title, "second");
    assert_eq!(f.posts.len().await, 2);
}
