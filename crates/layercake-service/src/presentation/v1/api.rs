//! Router aggregator for `/api/v1`.
//!
//! `layercake scaffold` appends imports and `.merge(..)` lines before the
//! anchors.

use axum::Router;

use crate::presentation::state::AppState;
use crate::presentation::v1::endpoints::health::router as health_router;
// layercake:imports

pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health_router())
        // layercake:routes
}
