use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use postcode_eligibility::classification::{lookup_router, SharedSnapshot};
use postcode_eligibility::error::AppError;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::{info, warn};

pub(crate) fn with_service_routes(snapshot: SharedSnapshot) -> Router {
    lookup_router(snapshot)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/update", post(update_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "postcodes": state.snapshot.len() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Runs the update pipeline off the async runtime and swaps the served
/// snapshot on success. A second request while one is running gets 409.
pub(crate) async fn update_endpoint(Extension(state): Extension<AppState>) -> Response {
    let Ok(_guard) = state.update_lock.try_lock() else {
        warn!("update requested while another run is in flight");
        let payload = json!({ "error": "an update is already running" });
        return (StatusCode::CONFLICT, Json(payload)).into_response();
    };

    let pipeline = state.pipeline.clone();
    let result = match tokio::task::spawn_blocking(move || pipeline.run()).await {
        Ok(result) => result,
        Err(join) => return AppError::Task(join.to_string()).into_response(),
    };

    match result {
        Ok(outcome) => {
            state.snapshot.replace(outcome.dataset);
            info!(postcodes = outcome.report.stats.total, "served snapshot replaced");
            (StatusCode::OK, Json(outcome.report)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}
