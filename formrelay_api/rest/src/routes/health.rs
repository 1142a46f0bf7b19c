use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use chrono::SecondsFormat;
use formrelay_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Json<HealthResponse> {
    let HealthStatus { timestamp } = service.get_status().await;

    Json(HealthResponse {
        status: "OK",
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
