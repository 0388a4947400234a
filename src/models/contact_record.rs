//! Contact record submitted through the website's contact form.

use serde::{Deserialize, Serialize};

/// A visitor's contact-form submission.
///
/// Built by the caller at submit time and handed to the dispatcher by value.
/// The dispatcher performs no field validation; see
/// [`ContactForm`](crate::domain::ContactForm) for the front-end check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactRecord {
    /// Visitor name
    pub name: String,

    /// Visitor email address (not validated here)
    pub email: String,

    /// Visitor phone number
    pub phone: String,

    /// City the visitor lives in, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Free-text message
    pub message: String,
}

impl ContactRecord {
    /// Create a new record without a city.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            city: None,
            message: message.into(),
        }
    }

    /// Set the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// The city, or an empty string when absent.
    pub fn city_or_empty(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }
}

/// Fields of the webhook body, nested under `data`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebhookData<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub city: &'a str,
    pub message: &'a str,
}

/// JSON body posted to the CRM webhook.
///
/// Field order is fixed: `name`, `email`, `phone`, `city`, `message`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebhookPayload<'a> {
    pub data: WebhookData<'a>,
}

impl<'a> From<&'a ContactRecord> for WebhookPayload<'a> {
    fn from(record: &'a ContactRecord) -> Self {
        Self {
            data: WebhookData {
                name: &record.name,
                email: &record.email,
                phone: &record.phone,
                city: record.city_or_empty(),
                message: &record.message,
            },
        }
    }
}

/// Template variables for the templated-message provider.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub phone: &'a str,
    pub city: &'a str,
    pub message: &'a str,

    /// Decorrelation token so repeated identical submissions are not merged
    /// by the provider. Not a security value.
    pub contact_number: u32,
}

impl<'a> TemplateParams<'a> {
    /// Map a record onto the template variables.
    pub fn new(record: &'a ContactRecord, contact_number: u32) -> Self {
        Self {
            from_name: &record.name,
            from_email: &record.email,
            phone: &record.phone,
            city: record.city_or_empty(),
            message: &record.message,
            contact_number,
        }
    }
}
