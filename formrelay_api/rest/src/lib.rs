use axum::{http::HeaderValue, Router};
use formrelay_core_contact_contracts::ContactFeatureService;
use formrelay_core_health_contracts::HealthFeatureService;
use formrelay_core_inquiry_contracts::InquiryFeatureService;
use tokio::net::TcpListener;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact, Inquiry> {
    pub health: Health,
    pub contact: Contact,
    pub inquiry: Inquiry,
    pub config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// The only origin browsers may submit forms from.
    pub allowed_origin: HeaderValue,
}

impl<Health, Contact, Inquiry> RestServer<Health, Contact, Inquiry>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Inquiry: InquiryFeatureService,
{
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let router = self.router();
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::inquiry::router(self.inquiry.into()));

        // layers added last run first
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::cors::add(self.config.allowed_origin)(router)
    }
}
