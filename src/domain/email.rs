//! EmailAddress value object.

use super::errors::ValidationError;
use std::fmt;

/// A visitor email address that has passed a basic shape check.
///
/// # Example
///
/// ```
/// use airco_leads::domain::EmailAddress;
///
/// let email = EmailAddress::new(" jan@example.nl ").unwrap();
/// assert_eq!(email.into_inner(), "jan@example.nl");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress from form input.
    ///
    /// Surrounding whitespace is trimmed. The address must contain exactly one
    /// '@' with a non-empty local part and a dotted domain without empty labels
    /// or whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = email.as_ref().trim();

        if !Self::is_valid(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        Ok(Self(email.to_string()))
    }

    fn is_valid(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && domain.split('.').all(|label| !label.is_empty())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
