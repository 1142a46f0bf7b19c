use std::sync::Arc;

use formrelay_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use formrelay_email_contracts::{ContentType, Email, EmailService};
use formrelay_models::{
    contact::{ContactForm, ContactSubmission},
    email_address::{single_line, EmailAddressWithName},
};
use formrelay_templates_contracts::{ContactSubmissionTemplate, TemplateService};
use tracing::{info, trace};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email, Template> {
    pub email: Email,
    pub template: Template,
    pub config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub recipient: Arc<EmailAddressWithName>,
}

impl<EmailS, Template> ContactFeatureService for ContactFeatureServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    #[tracing::instrument(skip_all)]
    async fn send_message(&self, form: ContactForm) -> Result<(), ContactSendMessageError> {
        let submission = form
            .validate()
            .inspect_err(|err| info!("Rejected contact form: {err}"))?;

        let email = self.compose(submission)?;
        trace!(subject = %email.subject, "sending contact form submission");

        if !self.email.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}

impl<EmailS, Template> ContactFeatureServiceImpl<EmailS, Template>
where
    Template: TemplateService,
{
    fn compose(&self, submission: ContactSubmission) -> anyhow::Result<Email> {
        let ContactSubmission {
            name,
            email,
            message,
            company,
        } = submission;

        let body = self.template.render(&ContactSubmissionTemplate {
            name: name.clone(),
            email: email.as_str().into(),
            company,
            message,
        })?;

        Ok(Email {
            recipient: (*self.config.recipient).clone(),
            subject: format!("New Contact Form Submission from {}", single_line(&name)),
            body,
            content_type: ContentType::Html,
            reply_to: Some(email.with_name(&name)),
        })
    }
}
