use std::sync::Arc;

use anyhow::Context;
use formrelay_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(std::iter::once(BASE_TEMPLATE).chain(TEMPLATES.iter().copied()))
            .context("Failed to compile email templates")?;

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use formrelay_templates_contracts::{ContactSubmissionTemplate, ProductInquiryTemplate};
    use pretty_assertions::assert_eq;

    use super::*;

    fn contact() -> ContactSubmissionTemplate {
        ContactSubmissionTemplate {
            name: "Jordan".into(),
            email: "jordan@x.com".into(),
            company: None,
            message: "Please contact me\nabout pricing.".into(),
        }
    }

    fn inquiry() -> ProductInquiryTemplate {
        ProductInquiryTemplate {
            name: "Jordan".into(),
            email: "jordan@x.com".into(),
            phone: "+15550100200".into(),
            charger_type: "Home Charger 7kW".into(),
            message: None,
        }
    }

    fn render<T: Template + 'static>(template: T) -> String {
        TemplateServiceImpl::new().unwrap().render(&template).unwrap()
    }

    #[test]
    fn contact_submission() {
        let html = render(contact());

        assert!(html.contains("New Contact Form Submission"));
        assert!(html.contains("linear-gradient(135deg, #0ea5e9 0%, #10b981 100%)"));
        assert!(html.contains("<p><strong>Name:</strong> Jordan</p>"));
        assert!(html.contains(r#"<a href="mailto:jordan@x.com">jordan@x.com</a>"#));
        assert!(html.contains("Please contact me<br>about pricing."));
        assert!(html.contains("within 24 hours for the best customer experience"));
        assert!(!html.contains("Company:"));
    }

    #[test]
    fn contact_submission_with_company() {
        let html = render(ContactSubmissionTemplate {
            company: Some("Acme".into()),
            ..contact()
        });

        assert!(html.contains("<p><strong>Company:</strong> Acme</p>"));
    }

    #[test]
    fn product_inquiry() {
        let html = render(inquiry());

        assert!(html.contains("New Product Inquiry"));
        assert!(html.contains(r#"<a href="tel:+15550100200">+15550100200</a>"#));
        assert!(html.contains(r#"font-weight: bold;">Home Charger 7kW</span>"#));
        assert!(html.contains("This is a qualified lead for Home Charger 7kW."));
        assert!(!html.contains("Additional Message"));
    }

    #[test]
    fn product_inquiry_with_message() {
        let html = render(ProductInquiryTemplate {
            message: Some("Garage install\r\nTwo cars".into()),
            ..inquiry()
        });

        assert!(html.contains("Additional Message"));
        assert!(html.contains("Garage install<br>Two cars"));
    }

    #[test]
    fn user_input_is_escaped() {
        let html = render(ContactSubmissionTemplate {
            name: "<script>alert(1)</script>".into(),
            message: "<b>bold</b>\nnext".into(),
            ..contact()
        });

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;"));
        assert!(html.contains("<br>next"));
    }

    #[test]
    fn apostrophe_and_slash_are_escaped() {
        let html = render(ContactSubmissionTemplate {
            name: "Jordan O'Brien".into(),
            message: "Either/or works for me.".into(),
            ..contact()
        });

        assert!(html.contains("<p><strong>Name:</strong> Jordan O&#x27;Brien</p>"));
        assert!(html.contains("Either&#x2F;or works for me."));
    }

    #[test]
    fn deterministic() {
        assert_eq!(render(inquiry()), render(inquiry()));
    }
}
