//! Async channel interface over the synchronous HTTP clients.
//!
//! Each wrapper runs its blocking `ureq` call on `tokio::task::spawn_blocking`,
//! so two channels submitting at once never block the runtime or each other.

use super::{ChannelKind, EmailJsClient, WebhookClient};
use crate::error::{ChannelError, ChannelResult};
use crate::models::ContactRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// One delivery channel for contact records.
///
/// Implementations report failure through `ChannelError`; they never panic on
/// transport problems. The dispatcher owns the record and shares it read-only.
#[async_trait]
pub trait LeadChannel: Send + Sync {
    /// Which channel this is, for logging and metrics.
    fn kind(&self) -> ChannelKind;

    /// Submit one record.
    async fn submit(&self, record: Arc<ContactRecord>) -> ChannelResult<()>;
}

/// Templated-message channel backed by [`EmailJsClient`].
#[derive(Clone)]
pub struct EmailJsChannel {
    client: Arc<EmailJsClient>,
}

impl EmailJsChannel {
    pub fn new(client: EmailJsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl LeadChannel for EmailJsChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Email
    }

    async fn submit(&self, record: Arc<ContactRecord>) -> ChannelResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.send(&record))
            .await
            .map_err(|e| ChannelError::TaskFailed(format!("Task join error: {}", e)))?
    }
}

/// Webhook channel backed by [`WebhookClient`].
#[derive(Clone)]
pub struct WebhookChannel {
    client: Arc<WebhookClient>,
}

impl WebhookChannel {
    pub fn new(client: WebhookClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl LeadChannel for WebhookChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Webhook
    }

    async fn submit(&self, record: Arc<ContactRecord>) -> ChannelResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.send(&record))
            .await
            .map_err(|e| ChannelError::TaskFailed(format!("Task join error: {}", e)))?
    }
}
