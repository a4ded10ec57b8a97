use crate::services::diagnostics::{self, HealthStatus};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Connectivity report. Always answers 200; failures are described in the body.
pub async fn test_database(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(diagnostics::check(state.store(), state.env).await)
}
