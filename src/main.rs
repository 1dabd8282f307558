// Repository Service Main Entry Point
// Proxies the GitHub repository search for one organization behind two REST routes
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use repo_service::{api, cors, GitHubSearchClient, RepositorySource, ServiceConfig};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;

    let source: Arc<dyn RepositorySource> = Arc::new(GitHubSearchClient::from_config(&config)?);
    let state = web::Data::new(api::AppState::new(source));

    info!(
        upstream = %config.github_api_base,
        origin = %config.allowed_origin,
        "Server starting on {}:{}",
        config.host,
        config.service_port
    );

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors::build(&server_config))
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.service_port))?
    .run()
    .await?;

    Ok(())
}
