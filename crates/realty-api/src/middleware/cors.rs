//! CORS layer configuration.

use std::time::Duration;

use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use realty_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if is_wildcard(&config.allowed_origins) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    if is_wildcard(&config.allowed_headers) {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    layer
        .expose_headers([super::request_id::REQUEST_ID_HEADER])
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_detection() {
        assert!(is_wildcard(&["*".to_string()]));
        assert!(!is_wildcard(&["https://realty.example.com".to_string()]));
        assert!(!is_wildcard(&[]));
    }

    #[test]
    fn test_builds_from_defaults_and_explicit_lists() {
        let _ = build_cors_layer(&CorsConfig::default());
        let config = CorsConfig {
            allowed_origins: vec!["https://realty.example.com".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string()],
            allowed_headers: vec!["content-type".to_string(), "x-request-id".to_string()],
            max_age_seconds: 60,
        };
        let _ = build_cors_layer(&config);
    }
}
