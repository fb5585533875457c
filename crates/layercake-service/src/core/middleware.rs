//! HTTP middleware.
//!
//! Stack order, outermost first (see [`crate::build_app`]):
//!
//! ```text
//! SetRequestId → Trace → PropagateRequestId → SecurityHeaders
//!   → TrustedHosts → Cors → Compression → router
//!                                              └─ /api/v1: ApiKey
//! ```

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderName, HeaderValue,
        header::{HOST, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{
    core::config::Settings,
    presentation::{shared::errors::AppError, state::AppState},
};

pub const API_KEY_HEADER: &str = "x-api-key";

const REFERRER_POLICY: HeaderName = HeaderName::from_static("referrer-policy");
const PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");

// ── Security headers ──────────────────────────────────────────────────────────

pub async fn security_headers(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(
        PERMISSIONS_POLICY,
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );
    if state.settings.enable_hsts {
        headers.insert(
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }
    response
}

// ── Trusted hosts ─────────────────────────────────────────────────────────────

pub async fn trusted_hosts(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let allowed = &state.settings.allowed_hosts;
    if allowed.iter().any(|pattern| pattern == "*") {
        return next.run(request).await;
    }

    match request_host(request.headers()) {
        Some(host) if allowed.iter().any(|pattern| host_matches(pattern, &host)) => {
            next.run(request).await
        }
        host => {
            tracing::warn!(?host, "rejected untrusted host");
            AppError::BadRequest("Invalid host header".to_string()).into_response()
        }
    }
}

fn request_host(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(HOST)?.to_str().ok()?;
    let host = match raw.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => raw,
    };
    Some(host.to_ascii_lowercase())
}

/// Exact match, or `*.example.com` matching any subdomain of `example.com`.
fn host_matches(pattern: &str, host: &str) -> bool {
    let pattern = pattern.to_ascii_lowercase();
    match pattern.strip_prefix("*.") {
        Some(domain) => host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.') && prefix.len() > 1),
        None => pattern == host,
    }
}

// ── API key ───────────────────────────────────────────────────────────────────

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.settings.requires_api_key() {
        return next.run(request).await;
    }

    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    match presented {
        Some(key) if state.settings.api_keys.iter().any(|k| k == key) => next.run(request).await,
        Some(_) => AppError::Unauthorized("Invalid API key".to_string()).into_response(),
        None => AppError::Unauthorized("Missing API key".to_string()).into_response(),
    }
}

// ── CORS ──────────────────────────────────────────────────────────────────────

pub fn cors_layer(settings: &Settings) -> CorsLayer {
    let origin = if settings.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = settings
            .cors_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_header_port_is_stripped() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("API.example.com:8080"));
        assert_eq!(request_host(&headers).as_deref(), Some("api.example.com"));
    }

    #[test]
    fn wildcard_matches_subdomains_only() {
        assert!(host_matches("*.example.com", "api.example.com"));
        assert!(!host_matches("*.example.com", "example.com"));
        assert!(!host_matches("*.example.com", "badexample.com"));
        assert!(host_matches("localhost", "localhost"));
        assert!(!host_matches("localhost", "localhost.evil"));
    }
}
