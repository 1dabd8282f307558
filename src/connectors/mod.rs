// Connector Architecture - upstream repository sources
pub mod trait_def;
pub mod github;

pub use trait_def::RepositorySource;
pub use github::GitHubSearchClient;
