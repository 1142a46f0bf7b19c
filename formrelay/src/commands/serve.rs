use anyhow::Context;
use formrelay_config::Config;
use formrelay_email_contracts::EmailService;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = email::connect(&config.email)?;

    // Startup diagnostic only. Requests are served whether or not it succeeds.
    tokio::spawn({
        let email = email.clone();
        async move {
            match email.ping().await {
                Ok(()) => info!("SMTP server is ready to send emails"),
                Err(err) => error!("SMTP connection check failed: {err:#}"),
            }
        }
    });

    let config_provider = ConfigProvider::new(&config)?;
    let server = Provider::new(config_provider, email)?.rest_server();

    let listener = TcpListener::bind((config.http.host, config.http.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind to {}:{}",
                config.http.host, config.http.port
            )
        })?;
    info!("Starting http server on {}", listener.local_addr()?);

    server.serve(listener).await
}
