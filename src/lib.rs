//! Airco Leads - contact-form lead dispatcher for the airco installation website.
//!
//! A visitor's contact request is delivered through two independent channels,
//! an EmailJS template and a CRM webhook. The lead counts as captured when at
//! least one of them accepts it.
//!
//! # Architecture
//!
//! - **models**: The contact record and the payloads sent to each channel
//! - **domain**: Validated value objects for the optional front-end form check
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP clients for the two channels and the async channel trait
//! - **dispatcher**: Concurrent fan-out with an "at least one succeeded" policy
//! - **metrics**: Counters for channel outcomes and request timings

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;

pub use client::{ChannelKind, EmailJsClient, LeadChannel, WebhookClient};
pub use config::Config;
pub use dispatcher::{DispatchReport, LeadDispatcher};
pub use domain::{ContactForm, ValidationError};
pub use error::{ChannelError, ConfigError, DispatchError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::ContactRecord;
