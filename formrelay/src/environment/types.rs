use formrelay_core_contact_impl::ContactFeatureServiceImpl;
use formrelay_core_health_impl::HealthFeatureServiceImpl;
use formrelay_core_inquiry_impl::InquiryFeatureServiceImpl;
use formrelay_email_impl::EmailServiceImpl;
use formrelay_shared_impl::time::TimeServiceImpl;
use formrelay_templates_impl::TemplateServiceImpl;

// API
pub type RestServer =
    formrelay_api_rest::RestServer<HealthFeature, ContactFeature, InquiryFeature>;

// Email
pub type Email = EmailServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Email, Template>;
pub type HealthFeature = HealthFeatureServiceImpl<Time>;
pub type InquiryFeature = InquiryFeatureServiceImpl<Email, Template>;
