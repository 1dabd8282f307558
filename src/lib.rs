// Repository Service - read-only REST proxy over the GitHub repository search
// Serves one organization's top repositories to the browser frontend

pub mod api;
pub mod config;
pub mod connectors;
pub mod cors;
pub mod errors;
pub mod models;

pub use config::ServiceConfig;
pub use connectors::{GitHubSearchClient, RepositorySource};
pub use errors::{ServiceError, ServiceResult};
pub use models::{Repository, SearchEnvelope};
