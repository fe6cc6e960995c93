// src/api/routes.rs
use actix_web::web;
use super::{error, handlers};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/api").service(
                web::resource("/summarize")
                    .app_data(error::json_config())
                    .route(web::post().to(handlers::summarize)),
            ),
        );
}
