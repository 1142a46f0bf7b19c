use formrelay_models::inquiry::InquiryForm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInquiryForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Charger model picked from the inquiry form
    pub charger_type: Option<String>,
    pub message: Option<String>,
}

impl From<ApiInquiryForm> for InquiryForm {
    fn from(value: ApiInquiryForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            charger_type: value.charger_type,
            message: value.message,
        }
    }
}
