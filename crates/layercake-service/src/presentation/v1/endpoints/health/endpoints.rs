use axum::{Json, Router, extract::State, routing::get};

use crate::presentation::shared::errors::AppError;
use crate::presentation::shared::http_response::HttpResponse;
use crate::presentation::state::AppState;
use crate::presentation::v1::endpoints::health::controller::HealthController;
use crate::presentation::v1::schemas::health_response::HealthResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health(
    State(state): State<AppState>,
) -> Result<Json<HttpResponse<HealthResponse>>, AppError> {
    let controller = HealthController::from_container(&state.container)?;
    Ok(Json(HttpResponse::ok(controller.check())))
}
