use std::sync::Arc;

use formrelay_core_inquiry_contracts::{InquiryFeatureService, InquirySendError};
use formrelay_email_contracts::{ContentType, Email, EmailService};
use formrelay_models::{
    email_address::{single_line, EmailAddressWithName},
    inquiry::{InquiryForm, InquirySubmission},
};
use formrelay_templates_contracts::{ProductInquiryTemplate, TemplateService};
use tracing::{info, trace};

#[derive(Debug, Clone)]
pub struct InquiryFeatureServiceImpl<Email, Template> {
    pub email: Email,
    pub template: Template,
    pub config: InquiryFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct InquiryFeatureConfig {
    pub recipient: Arc<EmailAddressWithName>,
}

impl<EmailS, Template> InquiryFeatureService for InquiryFeatureServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    #[tracing::instrument(skip_all)]
    async fn send_inquiry(&self, form: InquiryForm) -> Result<(), InquirySendError> {
        let submission = form
            .validate()
            .inspect_err(|err| info!("Rejected product inquiry: {err}"))?;

        let email = self.compose(submission)?;
        trace!(subject = %email.subject, "sending product inquiry");

        if !self.email.send(email).await? {
            return Err(InquirySendError::Send);
        }

        Ok(())
    }
}

impl<EmailS, Template> InquiryFeatureServiceImpl<EmailS, Template>
where
    Template: TemplateService,
{
    fn compose(&self, submission: InquirySubmission) -> anyhow::Result<Email> {
        let InquirySubmission {
            name,
            email,
            phone,
            charger_type,
            message,
        } = submission;

        let subject = format!(
            "Product Inquiry - {} from {}",
            single_line(&charger_type),
            single_line(&name)
        );
        let body = self.template.render(&ProductInquiryTemplate {
            name: name.clone(),
            email: email.as_str().into(),
            phone,
            charger_type,
            message,
        })?;

        Ok(Email {
            recipient: (*self.config.recipient).clone(),
            subject,
            body,
            content_type: ContentType::Html,
            reply_to: Some(email.with_name(&name)),
        })
    }
}
