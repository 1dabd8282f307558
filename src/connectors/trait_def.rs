// Repository Source Trait - Common interface for upstream repository providers
use crate::errors::{ServiceError, ServiceResult};
use crate::models::{find_by_id, Repository};
use async_trait::async_trait;

#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Source identifier (github, ...)
    fn id(&self) -> &'static str;

    /// Fetch one page of repositories, in upstream order
    async fn fetch_repositories(&self) -> ServiceResult<Vec<Repository>>;

    /// Fetch the page and pick the first record with a matching id
    async fn fetch_repository(&self, id: u64) -> ServiceResult<Repository> {
        let repositories = self.fetch_repositories().await?;
        find_by_id(repositories, id).ok_or(ServiceError::NotFound(id))
    }
}
