use std::future::Future;

use formrelay_models::{inquiry::InquiryForm, validation::ValidationErrors};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait InquiryFeatureService: Send + Sync + 'static {
    /// Validate a product inquiry and relay it to the configured recipient.
    fn send_inquiry(
        &self,
        form: InquiryForm,
    ) -> impl Future<Output = Result<(), InquirySendError>> + Send;
}

#[derive(Debug, Error)]
pub enum InquirySendError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Failed to send inquiry.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockInquiryFeatureService {
    pub fn with_send_inquiry(
        mut self,
        form: InquiryForm,
        result: Result<(), InquirySendError>,
    ) -> Self {
        self.expect_send_inquiry()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
