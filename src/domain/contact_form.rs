//! Raw contact-form input and its conversion into a [`ContactRecord`].

use super::{EmailAddress, PhoneNumber, ValidationError};
use crate::models::ContactRecord;
use serde::Deserialize;

/// Contact form as typed by the visitor.
///
/// Name, email, phone and message are required; city is optional and a blank
/// city is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Check the form and produce a trimmed [`ContactRecord`].
    ///
    /// Fields are checked in form order, so the first error matches the first
    /// offending input the visitor sees.
    pub fn validate(self) -> Result<ContactRecord, ValidationError> {
        let name = required("name", &self.name)?;
        let email = EmailAddress::new(required("email", &self.email)?)?;
        let phone = PhoneNumber::new(required("phone", &self.phone)?)?;
        let message = required("message", &self.message)?;

        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(str::to_string);

        Ok(ContactRecord {
            name: name.to_string(),
            email: email.into_inner(),
            phone: phone.into_inner(),
            city,
            message: message.to_string(),
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: " Jan ".to_string(),
            email: "jan@x.nl".to_string(),
            phone: "06-12345678".to_string(),
            city: Some("Maastricht".to_string()),
            message: "Graag een offerte voor een split-unit".to_string(),
        }
    }

    #[test]
    fn test_valid_form_becomes_record() {
        let record = form().validate().unwrap();
        assert_eq!(record.name, "Jan");
        assert_eq!(record.phone, "06-12345678");
        assert_eq!(record.city.as_deref(), Some("Maastricht"));
    }

    #[test]
    fn test_blank_city_becomes_none() {
        let record = ContactForm {
            city: Some("   ".to_string()),
            ..form()
        }
        .validate()
        .unwrap();
        assert_eq!(record.city, None);
    }

    #[test]
    fn test_missing_required_fields() {
        let mut blank_name = form();
        blank_name.name = " ".to_string();
        assert_eq!(
            blank_name.validate().unwrap_err(),
            ValidationError::EmptyField("name")
        );

        let mut no_message = form();
        no_message.message.clear();
        assert_eq!(
            no_message.validate().unwrap_err(),
            ValidationError::EmptyField("message")
        );

        let mut no_email = form();
        no_email.email.clear();
        assert_eq!(
            no_email.validate().unwrap_err(),
            ValidationError::EmptyField("email")
        );
    }

    #[test]
    fn test_invalid_email_and_phone() {
        let mut bad_email = form();
        bad_email.email = "jan".to_string();
        assert!(matches!(
            bad_email.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));

        let mut bad_phone = form();
        bad_phone.phone = "bel me".to_string();
        assert!(matches!(
            bad_phone.validate(),
            Err(ValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_form_from_json_without_city() {
        let form: ContactForm = serde_json::from_str(
            r#"{"name":"Test","email":"t@t.nl","phone":"0600000000","message":"hi"}"#,
        )
        .unwrap();
        let record = form.validate().unwrap();
        assert_eq!(record.city_or_empty(), "");
    }
}
