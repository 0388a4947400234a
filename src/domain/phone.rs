//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// Minimum number of digits in a Dutch number (`0612345678`).
const MIN_DIGITS: usize = 10;

/// Maximum number of digits, enough for international notation (`0031...`).
const MAX_DIGITS: usize = 15;

/// A visitor phone number that has passed a basic shape check.
///
/// Formatting is kept as typed; only the character set and digit count are
/// checked.
///
/// # Example
///
/// ```
/// use airco_leads::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("06-12345678").unwrap();
/// assert_eq!(phone.into_inner(), "06-12345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from form input.
    ///
    /// # Validation Rules
    ///
    /// - Surrounding whitespace is trimmed
    /// - Only digits, spaces, hyphens, parentheses, a plus sign and periods
    /// - Between 10 and 15 digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref().trim();

        if !Self::is_valid(phone) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(Self(phone.to_string()))
    }

    fn is_valid(phone: &str) -> bool {
        let allowed = phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'));

        let digits = phone.chars().filter(char::is_ascii_digit).count();

        allowed && (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
