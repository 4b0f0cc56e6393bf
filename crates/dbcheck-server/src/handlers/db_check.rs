use axum::{extract::State, http::StatusCode, Json};

use dbcheck_core::types::ConnectivityResult;

use crate::app_state::AppState;

/// Probe the database once and report the outcome.
///
/// Responds 200 when the liveness query succeeds and 500 otherwise. The body
/// never carries error detail.
pub async fn db_check(State(state): State<AppState>) -> (StatusCode, Json<ConnectivityResult>) {
    let result = state.probe.check().await;
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(result))
}
