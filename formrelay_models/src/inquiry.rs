use crate::{
    email_address::EmailAddress,
    validation::{
        parse_email, trim, trim_optional, validate, Check, FieldRule, ValidationErrors,
        INVALID_EMAIL, NAME_TOO_SHORT,
    },
};

/// A product inquiry as it was submitted, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub charger_type: Option<String>,
    pub message: Option<String>,
}

/// A product inquiry that passed all [`InquiryForm::RULES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquirySubmission {
    pub name: String,
    pub email: EmailAddress,
    /// Only the length is checked, the format is up to the submitter.
    pub phone: String,
    /// One of the charger models offered by the inquiry form.
    pub charger_type: String,
    pub message: Option<String>,
}

impl InquiryForm {
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
            field: "phone",
            value: |f| f.phone.as_deref(),
            check: Check::MinLength(10),
            message: "Phone number must be at least 10 characters",
        },
        FieldRule {
            field: "chargerType",
            value: |f| f.charger_type.as_deref(),
            check: Check::NotEmpty,
            message: "Please select a charger type",
        },
    ];

    pub fn trimmed(mut self) -> Self {
        trim(&mut self.name);
        trim(&mut self.email);
        trim(&mut self.phone);
        trim(&mut self.charger_type);
        self.message = trim_optional(self.message);
        self
    }

    pub fn validate(self) -> Result<InquirySubmission, ValidationErrors> {
        let form = self.trimmed();
        validate(&form, Self::RULES)?;

        Ok(InquirySubmission {
            email: parse_email(form.email)?,
            name: form.name.unwrap_or_default(),
            phone: form.phone.unwrap_or_default(),
            charger_type: form.charger_type.unwrap_or_default(),
            message: form.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form() -> InquiryForm {
        InquiryForm {
            name: Some("Jordan".into()),
            email: Some("jordan@x.com".into()),
            phone: Some("+1 555 0100 200".into()),
            charger_type: Some("Home Charger 7kW".into()),
            message: None,
        }
    }

    #[test]
    fn ok() {
        let result = InquiryForm {
            message: Some("Line one\nLine two ".into()),
            ..form()
        }
        .validate();

        assert_eq!(
            result.unwrap(),
            InquirySubmission {
                name: "Jordan".into(),
                email: "jordan@x.com".parse().unwrap(),
                phone: "+1 555 0100 200".into(),
                charger_type: "Home Charger 7kW".into(),
                message: Some("Line one\nLine two".into()),
            }
        );
    }

    #[test]
    fn missing_charger_type() {
        let errors = InquiryForm {
            charger_type: None,
            ..form()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), ["chargerType"]);
        assert_eq!(errors.0[0].message, "Please select a charger type");
    }

    #[test]
    fn blank_charger_type() {
        let errors = InquiryForm {
            charger_type: Some("  ".into()),
            ..form()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), ["chargerType"]);
        assert_eq!(errors.0[0].value.as_deref(), Some(""));
    }

    #[test]
    fn phone_is_only_length_checked() {
        let short = InquiryForm {
            phone: Some("555-0100".into()),
            ..form()
        };
        assert_eq!(
            short.validate().unwrap_err().fields().collect::<Vec<_>>(),
            ["phone"]
        );

        let letters = InquiryForm {
            phone: Some("call me maybe".into()),
            ..form()
        };
        assert!(letters.validate().is_ok());
    }

    #[test]
    fn violations_are_independent() {
        let errors = InquiryForm {
            name: Some("J".into()),
            email: Some("not an email".into()),
            ..form()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), ["name", "email"]);
    }
}
