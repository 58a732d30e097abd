//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .route("/health", web::get().to(health::health_check))
        .route("/new-post", web::get().to(posts::new_post_form))
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list_posts))
                .route(web::post().to(posts::create_post)),
        )
        .service(web::resource("/posts/{id}").route(web::get().to(posts::post_detail)))
        .service(
            web::resource("/posts/{id}/edit")
                .route(web::get().to(posts::edit_post_form))
                .route(web::post().to(posts::update_post)),
        )
        .service(web::resource("/posts/{id}/delete").route(web::post().to(posts::delete_post)));
}
