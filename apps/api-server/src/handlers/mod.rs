//! HTTP handlers and route configuration.

mod board;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Operational routes
            .route("/health", web::get().to(health::health_check))
            // Board routes
            .service(
                web::scope("/board")
                    .route("", web::get().to(board::list))
                    .route("", web::post().to(board::create))
                    .route("/{id}", web::get().to(board::get))
                    .route("/{id}", web::put().to(board::update))
                    .route("/{id}", web::delete().to(board::delete)),
            ),
    );
}
