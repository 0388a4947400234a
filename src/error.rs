//! Error types for the lead dispatcher.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Channel errors stay inside the dispatcher and are only logged; callers see
//! [`DispatchError`].

use thiserror::Error;

/// Aggregate outcome errors returned to the caller of the dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Both the templated-message channel and the webhook channel failed
    #[error("Failed to send contact form data")]
    AllChannelsFailed,

    /// The webhook channel failed in webhook-only mode
    #[error("Webhook submission failed")]
    WebhookFailed,
}

/// Errors raised by a single delivery channel.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The endpoint answered with a status outside the accepted range
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection-level failure (DNS, refused connection, TLS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Failed to build the JSON request body
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The channel task panicked or was aborted
    #[error("Channel task failed: {0}")]
    TaskFailed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ChannelError
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;
