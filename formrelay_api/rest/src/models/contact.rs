use formrelay_models::contact::ContactForm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactForm {
    /// Full name of the sender
    pub name: Option<String>,
    /// Email address replies should go to
    pub email: Option<String>,
    pub message: Option<String>,
    pub company: Option<String>,
}

impl From<ApiContactForm> for ContactForm {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
            company: value.company,
        }
    }
}
