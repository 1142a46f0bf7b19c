use crate::{
    email_address::EmailAddress,
    validation::{
        parse_email, trim, trim_optional, validate, Check, FieldRule, ValidationErrors,
        INVALID_EMAIL, NAME_TOO_SHORT,
    },
};

/// A contact form as it was submitted, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub company: Option<String>,
}

/// A contact form that passed all [`ContactForm::RULES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub message: String,
    pub company: Option<String>,
}

impl ContactForm {
    pub const RULES: &'static [FieldRule<Self>] = &[
        FieldRule {
            field: "name",
            value: |f| f.name.as_deref(),
            check: Check::MinLength(2),
            message: NAME_TOO_SHORT,
        },
        FieldRule {
            field: "email",
            value: |f| f.email.as_deref(),
            check: Check::Email,
            message: INVALID_EMAIL,
        },
        FieldRule {
            field: "message",
            value: |f| f.message.as_deref(),
            check: Check::MinLength(10),
            message: "Message must be at least 10 characters",
        },
    ];

    pub fn trimmed(mut self) -> Self {
        trim(&mut self.name);
        trim(&mut self.email);
        trim(&mut self.message);
        self.company = trim_optional(self.company);
        self
    }

    pub fn validate(self) -> Result<ContactSubmission, ValidationErrors> {
        let form = self.trimmed();
        validate(&form, Self::RULES)?;

        Ok(ContactSubmission {
            email: parse_email(form.email)?,
            name: form.name.unwrap_or_default(),
            message: form.message.unwrap_or_default(),
            company: form.company,
        })
    }
}
