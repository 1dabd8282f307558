// GitHub Connector - repository search for a single organization
use super::RepositorySource;
use crate::{
    config::ServiceConfig,
    errors::{ServiceError, ServiceResult},
    models::{Repository, SearchEnvelope},
};

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::debug;

const SEARCH_PATH: &str = "/search/repositories";
const ORG_QUERY: &str = "org:godaddy";
const PER_PAGE: &str = "50";
const SORT_FIELD: &str = "stars";
const SORT_ORDER: &str = "desc";

pub struct GitHubSearchClient {
    api_base: String,
    user_agent: String,
    client: reqwest::Client,
}

impl GitHubSearchClient {
    pub fn new(api_base: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            user_agent: user_agent.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> ServiceResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            api_base: config.github_api_base.clone(),
            user_agent: config.user_agent.clone(),
            client: builder.build()?,
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), SEARCH_PATH)
    }

    fn query_params() -> [(&'static str, &'static str); 4] {
        [
            ("q", ORG_QUERY),
            ("per_page", PER_PAGE),
            ("sort", SORT_FIELD),
            ("order", SORT_ORDER),
        ]
    }
}

#[async_trait]
impl RepositorySource for GitHubSearchClient {
    fn id(&self) -> &'static str {
        "github"
    }

    async fn fetch_repositories(&self) -> ServiceResult<Vec<Repository>> {
        let url = self.search_url();
        debug!(url = %url, query = ORG_QUERY, "Searching GitHub repositories");

        let response = self
            .client
            .get(&url)
            .query(&Self::query_params())
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UpstreamStatus(status.as_u16()));
        }

        // Read the body first so transport and decode failures stay distinct
        let body = response.bytes().await?;
        let envelope: SearchEnvelope = serde_json::from_slice(&body)?;

        Ok(envelope.items)
    }
}
