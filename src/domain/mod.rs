//! Domain value objects for contact-form input.
//!
//! The dispatcher never validates; a front end that wants to reject obviously
//! broken input before submitting runs it through [`ContactForm::validate`]
//! first. The value objects check shape at construction time.

pub mod contact_form;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_form::ContactForm;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
