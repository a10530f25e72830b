use actix_web::web;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/chatbot", web::post().to(handlers::chatbot))
    )
    .route("/", web::get().to(handlers::index))
    .route("/health", web::get().to(handlers::health_check));
}
