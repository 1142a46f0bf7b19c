use formrelay_models::validation::FieldError;
use serde::Serialize;

pub mod contact;
pub mod inquiry;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiFieldError>>,
}

/// A rejected field, in the shape browser clients of this service expect.
#[derive(Debug, Serialize)]
pub struct ApiFieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub msg: &'static str,
    pub path: &'static str,
    pub location: &'static str,
}

impl From<FieldError> for ApiFieldError {
    fn from(value: FieldError) -> Self {
        Self {
            kind: "field",
            value: value.value,
            msg: value.message,
            path: value.field,
            location: "body",
        }
    }
}
