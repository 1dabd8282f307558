// Service Configuration
use actix_web::http::{header::HeaderValue, Uri};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub service_port: u16,

    // Upstream search API
    pub github_api_base: String,
    pub user_agent: String,

    // Browser origin allowed by the CORS layer
    pub allowed_origin: String,

    // Unset means outbound calls wait for the upstream indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.parse()
                    .with_context(|| format!("invalid REQUEST_TIMEOUT_SECS: {}", raw))?,
            ),
            None => None,
        };

        let port = get("SERVICE_PORT").unwrap_or_else(|| "8080".to_string());

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            service_port: port
                .parse()
                .with_context(|| format!("invalid SERVICE_PORT: {}", port))?,

            github_api_base: get("GITHUB_API_BASE")
                .unwrap_or_else(|| "https://api.github.com".to_string()),
            user_agent: get("GITHUB_USER_AGENT").unwrap_or_else(|| "repo-service".to_string()),

            allowed_origin: validate_origin(
                get("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string()),
            )?,

            request_timeout_secs,
        })
    }
}

/// An origin must be `scheme://host[:port]` and usable as a header value.
fn validate_origin(origin: String) -> Result<String> {
    HeaderValue::from_str(&origin)
        .with_context(|| format!("invalid CORS_ALLOWED_ORIGIN: {}", origin))?;
    let uri: Uri = origin
        .parse()
        .with_context(|| format!("invalid CORS_ALLOWED_ORIGIN: {}", origin))?;

    let has_path = uri.path_and_query().map_or(false, |pq| pq.as_str() != "/");
    if uri.scheme().is_none() || uri.host().is_none() || has_path || origin.ends_with('/') {
        bail!("invalid CORS_ALLOWED_ORIGIN: {}", origin);
    }
    Ok(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_vars(|_| None).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.github_api_base, "https://api.github.com");
        assert_eq!(config.user_agent, "repo-service");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_vars(lookup(&[
            ("HOST", "127.0.0.1"),
            ("SERVICE_PORT", "9090"),
            ("GITHUB_API_BASE", "http://localhost:4000"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost:5173"),
            ("REQUEST_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.service_port, 9090);
        assert_eq!(config.github_api_base, "http://localhost:4000");
        assert_eq!(config.allowed_origin, "http://localhost:5173");
        assert_eq!(config.request_timeout_secs, Some(15));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = ServiceConfig::from_vars(lookup(&[("SERVICE_PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("SERVICE_PORT"));

        assert!(ServiceConfig::from_vars(lookup(&[("SERVICE_PORT", "70000")])).is_err());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        for origin in ["*", "", "localhost:3000", "http://", "http://localhost:3000/app", "http://localhost:3000/", "http://bad host"] {
            assert!(
                ServiceConfig::from_vars(lookup(&[("CORS_ALLOWED_ORIGIN", origin)])).is_err(),
                "expected {:?} to be rejected",
                origin
            );
        }

        let config =
            ServiceConfig::from_vars(lookup(&[("CORS_ALLOWED_ORIGIN", "https://app.example.com:8443")]))
                .unwrap();
        assert_eq!(config.allowed_origin, "https://app.example.com:8443");
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        assert!(ServiceConfig::from_vars(lookup(&[("REQUEST_TIMEOUT_SECS", "soon")])).is_err());
    }
}
