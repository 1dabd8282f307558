// Service Error Types
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("error fetching repositories: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GitHub API returned status code: {0}")]
    UpstreamStatus(u16),

    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid repository ID")]
    InvalidId(String),

    #[error("Repository not found")]
    NotFound(u64),
}

impl ServiceError {
    /// True for failures raised while talking to the upstream.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ServiceError::Network(_) | ServiceError::UpstreamStatus(_) | ServiceError::Decode(_)
        )
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        // All fetch failures collapse to 500; the variant is kept for logs.
        if self.is_upstream() {
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
        match self {
            ServiceError::InvalidId(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
