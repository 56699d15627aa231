//! Liveness endpoint

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct PingResponse {
    message: &'static str,
}

/// GET /ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}
