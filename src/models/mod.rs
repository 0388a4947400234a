//! Data models for contact-form submissions.

pub mod contact_record;

pub use contact_record::{ContactRecord, TemplateParams, WebhookData, WebhookPayload};
