//! layercake service - layered axum application
//!
//! The project layout `layercake scaffold` targets:
//!
//! ```text
//! src/
//! ├── core/            settings, logging, DI container, middleware
//! ├── domain/          entities + capability ports
//! ├── application/     DTOs, mappers, use cases
//! ├── infrastructure/  port implementations
//! └── presentation/
//!     ├── shared/      response envelope, AppError
//!     └── v1/          schemas, endpoints, api_router()
//! ```

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use axum::{Router, middleware::from_fn_with_state};
use tower_http::{
    compression::{CompressionLayer, predicate::SizeAbove},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::core::{config::Settings, container::build_container, middleware};
use crate::presentation::{state::AppState, v1::api::api_router};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the full application with a freshly populated container.
pub fn build_app(settings: Settings) -> Router {
    build_router(AppState::new(build_container(), settings))
}

/// Mount `/api/v1` and wrap it in the middleware stack.
pub fn build_router(state: AppState) -> Router {
    let api = api_router().route_layer(from_fn_with_state(
        state.clone(),
        middleware::require_api_key,
    ));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            CompressionLayer::new().compress_when(SizeAbove::new(state.settings.gzip_min_size)),
        )
        .layer(middleware::cors_layer(&state.settings))
        .layer(from_fn_with_state(state.clone(), middleware::trusted_hosts))
        .layer(from_fn_with_state(state.clone(), middleware::security_headers))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
