use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use orakel_infrastructure::RedisRecordingStore;

use crate::dto::{HealthDependencyStatus, HealthResponse};
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let recording_store = check_recording_store(state.redis_store.as_ref()).await;

    let ready = recording_store.status != "error";
    let (status, http_status) = if ready {
        ("ok", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        http_status,
        Json(HealthResponse {
            status,
            ready,
            recording_store,
        }),
    )
}

async fn check_recording_store(store: Option<&RedisRecordingStore>) -> HealthDependencyStatus {
    let Some(store) = store else {
        return HealthDependencyStatus {
            status: "disabled",
            detail: None,
        };
    };

    match store.ping().await {
        Ok(()) => HealthDependencyStatus {
            status: "ok",
            detail: None,
        },
        Err(error) => HealthDependencyStatus {
            status: "error",
            detail: Some(error.to_string()),
        },
    }
}
