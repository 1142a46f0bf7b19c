use std::{collections::HashMap, net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use formrelay_models::{email_address::EmailAddressWithName, Sensitive};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Prefix of environment variables overriding single config values, e.g.
/// `FORMRELAY__EMAIL__PASSWORD`.
pub const ENV_PREFIX: &str = "FORMRELAY";

/// Load and merge the given config files, later files overriding earlier ones,
/// then apply overrides from the process environment.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_env(paths, None)
}

fn load_with_env(
    paths: &[impl AsRef<Path>],
    env: Option<HashMap<String, String>>,
) -> anyhow::Result<Config> {
    let environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .source(env);

    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(environment)
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub inquiry: InquiryConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origin of the website hosting the forms, e.g. `https://www.example.com`.
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub username: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub from: EmailAddressWithName,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct InquiryConfig {
    pub recipient: EmailAddressWithName,
}
