//! HTTP clients for the two lead delivery channels.
//!
//! The clients are synchronous (`ureq`) and are driven from async code through
//! the [`LeadChannel`] wrappers, which run each request on
//! `tokio::task::spawn_blocking`. Both clients are built once at startup from
//! [`Config`](crate::config::Config) and shared behind an `Arc`.

mod async_wrapper;
mod emailjs;
mod webhook;

pub use async_wrapper::{EmailJsChannel, LeadChannel, WebhookChannel};
pub use emailjs::EmailJsClient;
pub use webhook::WebhookClient;

use crate::error::ChannelError;
use std::fmt;
use std::io;
use std::time::Duration;

/// Longest error body kept for logging.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Identifies one of the two delivery channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// Templated-message provider (EmailJS)
    Email,
    /// CRM webhook
    Webhook,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::Webhook => "webhook",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a ureq agent with an explicit per-request timeout.
fn build_agent(timeout_secs: u64) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Map a ureq error to a ChannelError.
fn map_error(error: ureq::Error) -> ChannelError {
    match error {
        ureq::Error::Status(status, response) => ChannelError::Status {
            status,
            body: read_body(response),
        },
        ureq::Error::Transport(transport) => {
            let timed_out = std::error::Error::source(&transport)
                .and_then(|source| source.downcast_ref::<io::Error>())
                .map(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
                .unwrap_or(false);

            if timed_out {
                ChannelError::Timeout
            } else if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                ChannelError::Transport("Connection failed".to_string())
            } else {
                ChannelError::Transport(transport.to_string())
            }
        }
    }
}

/// Read a response body for diagnostics, capped in length.
fn read_body(response: ureq::Response) -> String {
    response
        .into_string()
        .map(|body| body.chars().take(MAX_ERROR_BODY_CHARS).collect())
        .unwrap_or_else(|_| "<unreadable body>".to_string())
}
