//! Post handlers - list, create, view, edit and delete.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use blog_core::service::NewPost;
use blog_shared::dto::{CreatePostForm, UpdatePostForm};
use blog_shared::{AuthorOption, EditPostView, PostDetailView, PostListItem};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{
    CreatePostTemplate, PostDetailTemplate, PostsListTemplate, UpdatePostTemplate, render,
};

fn redirect_to_posts() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/posts"))
        .finish()
}

/// GET /
pub async fn index() -> HttpResponse {
    redirect_to_posts()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list_posts()
        .await?
        .into_iter()
        .map(PostListItem::from)
        .collect();

    render(&PostsListTemplate { posts })
}

/// GET /new-post
pub async fn new_post_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state
        .posts
        .list_authors()
        .await?
        .into_iter()
        .map(AuthorOption::from)
        .collect();

    render(&CreatePostTemplate { authors })
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<CreatePostForm>,
) -> AppResult<HttpResponse> {
    let (author_id, content) = form.into_inner().into_parts();

    state
        .posts
        .create_post(NewPost { author_id, content })
        .await?;

    Ok(redirect_to_posts())
}

/// GET /posts/{id}
pub async fn post_detail(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&id).await?;
    let post = PostDetailView::new(post, &state.display_timezone);

    render(&PostDetailTemplate { post })
}

/// GET /posts/{id}/edit
pub async fn edit_post_form(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_editable_post(&id).await?;

    render(&UpdatePostTemplate {
        post: EditPostView::from(post),
    })
}

/// POST /posts/{id}/edit
///
/// Redirects whether or not a post matched.
pub async fn update_post(
    state: web::Data<AppState>,
    id: web::Path<String>,
    form: web::Form<UpdatePostForm>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .update_post(&id, form.into_inner().into())
        .await?;

    Ok(redirect_to_posts())
}

/// POST /posts/{id}/delete
///
/// Redirects whether or not a post matched.
pub async fn delete_post(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete_post(&id).await?;

    Ok(redirect_to_posts())
}
