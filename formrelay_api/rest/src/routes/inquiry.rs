use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing, Json, Router,
};
use formrelay_core_inquiry_contracts::{InquiryFeatureService, InquirySendError};

use crate::{
    errors::{delivery_failed, invalid_request_body, success, validation_failed},
    models::inquiry::ApiInquiryForm,
};

const FAILED: &str = "Failed to send inquiry";

pub fn router(service: Arc<impl InquiryFeatureService>) -> Router<()> {
    Router::new()
        .route("/send-inquiry", routing::post(send_inquiry))
        .with_state(service)
}

async fn send_inquiry(
    service: State<Arc<impl InquiryFeatureService>>,
    form: Result<Json<ApiInquiryForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return invalid_request_body(rejection),
    };

    match service.send_inquiry(form.into()).await {
        Ok(()) => success("Inquiry sent successfully"),
        Err(InquirySendError::Validation(errors)) => validation_failed(errors),
        Err(InquirySendError::Send) => {
            delivery_failed(anyhow!("smtp server refused the product inquiry"), FAILED)
        }
        Err(InquirySendError::Other(err)) => delivery_failed(err, FAILED),
    }
}
