use anyhow::Context;
use formrelay_config::EmailConfig;
use formrelay_email_impl::{EmailServiceImpl, SmtpCredentials};

/// Set up the SMTP transport. The connection itself is opened lazily.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let credentials = config.username.clone().map(|username| SmtpCredentials {
        username,
        password: config.password.clone().unwrap_or_default(),
    });

    EmailServiceImpl::new(
        &config.smtp_url,
        config.from.clone(),
        credentials,
        config.timeout.map(Into::into),
    )
    .context("Failed to configure SMTP transport")
}
