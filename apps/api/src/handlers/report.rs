use axum::Json;
use axum::extract::State;
use orakel_core::AppError;

use crate::dto::ReportResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn report_handler(State(state): State<AppState>) -> ApiResult<Json<ReportResponse>> {
    let report = tokio::time::timeout(state.report_timeout, state.report_service.build_report())
        .await
        .map_err(|_| {
            AppError::Internal(format!(
                "building the report exceeded {}s",
                state.report_timeout.as_secs()
            ))
        })??;

    Ok(Json(ReportResponse::from(&report)))
}
