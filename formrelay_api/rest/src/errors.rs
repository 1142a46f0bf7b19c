use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use formrelay_models::validation::ValidationErrors;

use crate::models::ApiResponse;

/// Log the full cause and answer with a generic message only.
pub fn delivery_failed(err: impl Into<anyhow::Error>, message: &'static str) -> Response {
    let err = err.into();
    tracing::error!("failed to deliver email: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

pub fn validation_failed(errors: ValidationErrors) -> Response {
    let response = ApiResponse {
        success: false,
        message: "Validation failed",
        errors: Some(errors.0.into_iter().map(Into::into).collect()),
    };
    (StatusCode::BAD_REQUEST, Json(response)).into_response()
}

pub fn invalid_request_body(rejection: JsonRejection) -> Response {
    tracing::debug!("rejected request body: {}", rejection.body_text());
    error(StatusCode::BAD_REQUEST, "Invalid request body")
}

pub fn success(message: &'static str) -> Response {
    Json(ApiResponse {
        success: true,
        message,
        errors: None,
    })
    .into_response()
}

pub fn error(code: StatusCode, message: &'static str) -> Response {
    let response = ApiResponse {
        success: false,
        message,
        errors: None,
    };
    (code, Json(response)).into_response()
}
