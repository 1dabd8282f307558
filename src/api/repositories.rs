//! Repository API endpoints

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::connectors::RepositorySource;
use crate::errors::{ServiceError, ServiceResult};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RepositorySource>,
}

impl AppState {
    pub fn new(source: Arc<dyn RepositorySource>) -> Self {
        Self { source }
    }
}

/// List every repository in the upstream page
pub async fn list_repositories(state: web::Data<AppState>) -> ServiceResult<HttpResponse> {
    let repositories = state.source.fetch_repositories().await.map_err(|e| {
        error!(source = state.source.id(), "Failed to fetch repositories: {}", e);
        e
    })?;

    info!(count = repositories.len(), "Listed repositories");

    Ok(HttpResponse::Ok().json(repositories))
}

/// Look up one repository by its numeric id
pub async fn get_repository(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ServiceResult<HttpResponse> {
    let id = parse_repository_id(&path)?;

    match state.source.fetch_repository(id).await {
        Ok(repository) => Ok(HttpResponse::Ok().json(repository)),
        Err(ServiceError::NotFound(id)) => {
            warn!(id, "Repository not found");
            Err(ServiceError::NotFound(id))
        }
        Err(e) => {
            error!(id, source = state.source.id(), "Failed to fetch repositories: {}", e);
            Err(e)
        }
    }
}

/// Path ids must be all ASCII digits and fit in a u64.
pub fn parse_repository_id(raw: &str) -> ServiceResult<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::InvalidId(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| ServiceError::InvalidId(raw.to_string()))
}
