use axum::http::StatusCode;

/// Process liveness. Does not touch the database.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
