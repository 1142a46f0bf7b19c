use anyhow::Context;
use axum::http::HeaderValue;
use formrelay_api_rest::RestServerConfig;
use formrelay_config::Config;
use formrelay_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use formrelay_core_health_impl::HealthFeatureServiceImpl;
use formrelay_core_inquiry_impl::{InquiryFeatureConfig, InquiryFeatureServiceImpl};
use formrelay_shared_impl::time::TimeServiceImpl;
use formrelay_templates_impl::TemplateServiceImpl;
use types::{Email, RestServer, Template};

pub mod types;

/// Everything that can be derived from the configuration alone.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    pub rest_server_config: RestServerConfig,
    pub contact_feature_config: ContactFeatureConfig,
    pub inquiry_feature_config: InquiryFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            allowed_origin: HeaderValue::from_str(&config.http.allowed_origin)
                .context("Invalid allowed origin")?,
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.recipient.clone().into(),
        };

        let inquiry_feature_config = InquiryFeatureConfig {
            recipient: config.inquiry.recipient.clone().into(),
        };

        Ok(Self {
            rest_server_config,
            contact_feature_config,
            inquiry_feature_config,
        })
    }
}

/// Wires the concrete services into a [`RestServer`].
#[derive(Debug, Clone)]
pub struct Provider {
    config: ConfigProvider,
    email: Email,
    template: Template,
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            email,
            template: TemplateServiceImpl::new()?,
        })
    }

    pub fn rest_server(self) -> RestServer {
        let Self {
            config,
            email,
            template,
        } = self;

        RestServer {
            health: HealthFeatureServiceImpl {
                time: TimeServiceImpl,
            },
            contact: ContactFeatureServiceImpl {
                email: email.clone(),
                template: template.clone(),
                config: config.contact_feature_config,
            },
            inquiry: InquiryFeatureServiceImpl {
                email,
                template,
                config: config.inquiry_feature_config,
            },
            config: config.rest_server_config,
        }
    }
}
