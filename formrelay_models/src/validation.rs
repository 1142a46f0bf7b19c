//! Field validation expressed as data.
//!
//! Each form type owns a static list of [`FieldRule`]s. Every rule is evaluated
//! so that the caller always receives the complete list of problems.

use thiserror::Error;

use crate::email_address::EmailAddress;

/// A single predicate applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// At least this many characters.
    MinLength(usize),
    NotEmpty,
    /// Syntactically valid email address with a fully qualified domain.
    /// No deliverability check.
    Email,
}

impl Check {
    pub fn passes(self, value: &str) -> bool {
        match self {
            Check::MinLength(min) => value.chars().count() >= min,
            Check::NotEmpty => !value.is_empty(),
            Check::Email => value
                .parse::<EmailAddress>()
                .is_ok_and(|address| is_fqdn(address.0.domain())),
        }
    }
}

/// Dotted domain name made of letters, digits and inner hyphens, ending in an
/// alphabetic top level domain. IP literals and underscores are rejected.
fn is_fqdn(domain: &str) -> bool {
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    tld.chars().count() >= 2
        && tld.chars().all(char::is_alphabetic)
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

pub struct FieldRule<F> {
    /// Name of the field as it appears in the request body.
    pub field: &'static str,
    pub value: fn(&F) -> Option<&str>,
    pub check: Check,
    pub message: &'static str,
}

impl<F> FieldRule<F> {
    /// Returns the violation for `form`, if any. A missing value is checked as
    /// the empty string.
    pub fn apply(&self, form: &F) -> Option<FieldError> {
        let value = (self.value)(form);
        (!self.check.passes(value.unwrap_or_default())).then(|| FieldError {
            field: self.field,
            message: self.message,
            value: value.map(Into::into),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
    /// The offending value after trimming, `None` if the field was missing.
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed for {}", .0.iter().map(|err| err.field).collect::<Vec<_>>().join(", "))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|err| err.field)
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(value: FieldError) -> Self {
        Self(vec![value])
    }
}

/// Runs every rule against `form` and collects the violations in rule order.
pub fn validate<F>(form: &F, rules: &[FieldRule<F>]) -> Result<(), ValidationErrors> {
    let errors = rules
        .iter()
        .filter_map(|rule| rule.apply(form))
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

pub(crate) const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub(crate) const INVALID_EMAIL: &str = "Please provide a valid email";

/// Converts an email field that already passed [`Check::Email`].
pub(crate) fn parse_email(value: Option<String>) -> Result<EmailAddress, FieldError> {
    let value = value.unwrap_or_default();
    value.parse().map_err(|_| FieldError {
        field: "email",
        message: INVALID_EMAIL,
        value: Some(value),
    })
}

/// Trims surrounding whitespace in place.
pub(crate) fn trim(value: &mut Option<String>) {
    if let Some(s) = value {
        *s = s.trim().to_owned();
    }
}

/// Trims an optional field and drops it if nothing is left.
pub(crate) fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Form {
        a: Option<String>,
        b: Option<String>,
    }

    const RULES: &[FieldRule<Form>] = &[
        FieldRule {
            field: "a",
            value: |f| f.a.as_deref(),
            check: Check::MinLength(3),
            message: "a is too short",
        },
        FieldRule {
            field: "b",
            value: |f| f.b.as_deref(),
            check: Check::Email,
            message: "b is not an email",
        },
    ];

    #[test]
    fn min_length_counts_chars() {
        assert!(Check::MinLength(2).passes("Jo"));
        assert!(Check::MinLength(2).passes("Žo"));
        assert!(!Check::MinLength(2).passes("J"));
        assert!(Check::MinLength(0).passes(""));
    }

    #[test]
    fn not_empty() {
        assert!(Check::NotEmpty.passes("x"));
        assert!(!Check::NotEmpty.passes(""));
    }

    #[test]
    fn email() {
        for valid in ["jo@x.com", "s@y.io", "jo.smith+forms@mail.example.co.uk", "jo@my-host.de"] {
            assert!(Check::Email.passes(valid), "{valid:?}");
        }
        for invalid in [
            "",
            "jo@",
            "jo@localhost",
            "jo@x",
            "jo@[127.0.0.1]",
            "jo@127.0.0.1",
            "jo@x_y.com",
            "jo@x.c",
            "jo@x.c0m",
            "jo@-x.com",
            "jo@x..com",
        ] {
            assert!(!Check::Email.passes(invalid), "{invalid:?}");
        }
    }

    #[test]
    fn ok() {
        let form = Form {
            a: Some("abc".into()),
            b: Some("b@example.com".into()),
        };
        assert_eq!(validate(&form, RULES), Ok(()));
    }

    #[test]
    fn all_rules_are_evaluated() {
        let form = Form {
            a: Some("ab".into()),
            b: None,
        };
        let errors = validate(&form, RULES).unwrap_err();
        assert_eq!(
            errors.0,
            [
                FieldError {
                    field: "a",
                    message: "a is too short",
                    value: Some("ab".into()),
                },
                FieldError {
                    field: "b",
                    message: "b is not an email",
                    value: None,
                },
            ]
        );
        assert_eq!(errors.to_string(), "Validation failed for a, b");
    }

    #[test]
    fn trim_helpers() {
        let mut value = Some("  Jordan \n".to_owned());
        trim(&mut value);
        assert_eq!(value.as_deref(), Some("Jordan"));

        assert_eq!(trim_optional(Some("   ".into())), None);
        assert_eq!(trim_optional(Some(" Acme ".into())).as_deref(), Some("Acme"));
        assert_eq!(trim_optional(None), None);
    }
}
