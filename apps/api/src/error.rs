use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orakel_core::AppError;
use serde::Serialize;
use tracing::error;

/// API error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: String,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NoMapping(_) => StatusCode::NOT_FOUND,
            AppError::Discovery(_) | AppError::Fetch(_) | AppError::CacheFetch(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Conversion(_) | AppError::Decode(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!(status = %status, error = %self.0, "report request failed");

        let payload = Json(ErrorResponse {
            message: self.0.to_string(),
        });

        (status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use orakel_core::AppError;

    use super::ApiError;

    #[test]
    fn fatal_errors_map_to_distinct_statuses() {
        let cases = [
            (AppError::NoMapping("NoSuchKind".to_owned()), StatusCode::NOT_FOUND),
            (AppError::Discovery("refused".to_owned()), StatusCode::BAD_GATEWAY),
            (AppError::Fetch("forbidden".to_owned()), StatusCode::BAD_GATEWAY),
            (
                AppError::Conversion("item 0".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::Validation("bad".to_owned()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError(error).into_response().status(), expected);
        }
    }
}
