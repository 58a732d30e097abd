//! Askama templates and the helpers that turn them into responses.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use askama::Template;

use blog_shared::{AuthorOption, EditPostView, ErrorPage, PostDetailView, PostListItem};

use crate::middleware::error::{AppError, AppResult};

#[derive(Template)]
#[template(path = "posts-list.html")]
pub struct PostsListTemplate {
    pub posts: Vec<PostListItem>,
}

#[derive(Template)]
#[template(path = "create-post.html")]
pub struct CreatePostTemplate {
    pub authors: Vec<AuthorOption>,
}

#[derive(Template)]
#[template(path = "post-detail.html")]
pub struct PostDetailTemplate {
    pub post: PostDetailView,
}

#[derive(Template)]
#[template(path = "update-post.html")]
pub struct UpdatePostTemplate {
    pub post: EditPostView,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub error: ErrorPage,
}

/// Render a template as a 200 HTML response.
pub fn render<T: Template>(template: &T) -> AppResult<HttpResponse> {
    render_with_status(template, StatusCode::OK)
}

pub fn render_with_status<T: Template>(
    template: &T,
    status: StatusCode,
) -> AppResult<HttpResponse> {
    let body = template
        .render()
        .map_err(|e| AppError::Template(e.to_string()))?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}
