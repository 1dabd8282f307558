// Cross-origin policy for the browser frontend
use actix_cors::Cors;

use crate::config::ServiceConfig;

pub fn build(config: &ServiceConfig) -> Cors {
    Cors::default()
        .allowed_origin(&config.allowed_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
}
