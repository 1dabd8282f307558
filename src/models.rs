//! Repository records as returned by the GitHub search API.
//!
//! The same types are used to decode the upstream payload and to encode the
//! responses of this service, so field names follow the upstream JSON.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub watchers_count: u64,
    pub stargazers_count: u64,
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    // Missing or null items decode as an empty page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Repository>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Repository>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Repository>>::deserialize(deserializer)?.unwrap_or_default())
}

/// First record in `repositories` whose id equals `id`.
pub fn find_by_id(repositories: Vec<Repository>, id: u64) -> Option<Repository> {
    repositories.into_iter().find(|r| r.id == id)
}
