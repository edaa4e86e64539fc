//! HTTP handlers and route configuration.

mod board;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health::health_check))
        // List + search
        .route("/", web::get().to(board::list))
        .route("/board/search", web::get().to(board::search))
        // Post CRUD
        .service(
            web::scope("/post")
                .route("", web::post().to(board::create))
                .route("/edit/{id}", web::get().to(board::edit))
                .route("/edit/{id}", web::put().to(board::update))
                .route("/{id}", web::get().to(board::detail))
                .route("/{id}", web::delete().to(board::delete)),
        );
}
