use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing, Json, Router,
};
use formrelay_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};

use crate::{
    errors::{delivery_failed, invalid_request_body, success, validation_failed},
    models::contact::ApiContactForm,
};

const FAILED: &str = "Failed to send email";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/send-email", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    form: Result<Json<ApiContactForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return invalid_request_body(rejection),
    };

    match service.send_message(form.into()).await {
        Ok(()) => success("Email sent successfully"),
        Err(ContactSendMessageError::Validation(errors)) => validation_failed(errors),
        Err(ContactSendMessageError::Send) => {
            delivery_failed(anyhow!("smtp server refused the contact message"), FAILED)
        }
        Err(ContactSendMessageError::Other(err)) => delivery_failed(err, FAILED),
    }
}
