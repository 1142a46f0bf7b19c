use std::time::Duration;

use anyhow::anyhow;
use formrelay_email_contracts::{ContentType, Email, EmailService};
use formrelay_models::{email_address::EmailAddressWithName, Sensitive};
use formrelay_utils::Apply;
use lettre::{
    message::{header, MessageBuilder},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: Sensitive<String>,
}

impl EmailServiceImpl {
    /// Build a pooled SMTP transport from `url`, e.g. `smtps://smtp.example.com:465` or
    /// `smtp://localhost:1025`. Credentials given here take precedence over the ones
    /// embedded in the url. No connection is opened until the first send or ping.
    pub fn new(
        url: &str,
        from: EmailAddressWithName,
        credentials: Option<SmtpCredentials>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?
            .apply_map(credentials, |builder, SmtpCredentials { username, password }| {
                builder.credentials(Credentials::new(username, password.0))
            })
            .apply_map(timeout, |builder, timeout| builder.timeout(Some(timeout)))
            .build();

        Ok(Self { from, transport })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            })
            .body(email.body)
            .map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.build_message(email)?;

        let response = self.transport.send(message).await?;
        debug!(code = %response.code(), "smtp server accepted message");

        Ok(response.is_positive())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
