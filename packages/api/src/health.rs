// ABOUTME: Liveness endpoint for load balancers and process supervisors
// ABOUTME: Reports service name and version without touching the database

use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "todoboard"
    }))
}
