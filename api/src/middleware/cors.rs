//! CORS configuration for browser clients.
//!
//! Development allows any origin; production restricts to the origins named
//! in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use signet_shared::config::Environment;

/// Build the CORS middleware for the current environment.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production)
/// - `CORS_MAX_AGE`: Preflight cache lifetime in seconds (default: 3600)
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = std::env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment.is_production() {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-access-token"),
            header::HeaderName::from_static("x-authorization"),
            header::HeaderName::from_static("x-refresh-token"),
        ])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-access-token"),
            header::HeaderName::from_static("x-authorization"),
            header::HeaderName::from_static("x-refresh-token"),
        ])
        .supports_credentials()
        .max_age(max_age);

    if let Ok(allowed_origins) = std::env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(str::trim) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_for_each_environment() {
        let _dev = create_cors(Environment::Development);
        let _prod = create_cors(Environment::Production);
    }
}
