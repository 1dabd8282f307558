//! REST API endpoints
//!
//! Two read-only routes over the upstream repository search, plus a health
//! probe that never touches the upstream.

pub mod repositories;

pub use repositories::{get_repository, list_repositories, AppState};

use actix_web::{web, HttpResponse};

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "repo-service"
    }))
}

/// Register every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .service(
                web::resource("/repositories").route(web::get().to(list_repositories)),
            )
            .service(
                web::resource("/repositories/{id}").route(web::get().to(get_repository)),
            ),
    );
}
