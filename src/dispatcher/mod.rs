//! Dual-channel lead dispatcher.
//!
//! A dispatch fans a contact record out to the templated-message channel and
//! the webhook channel at the same time, waits for both to settle, and reports
//! success when at least one of them accepted the lead. Channel errors are
//! logged here and never reach the caller; the caller only sees
//! [`DispatchError`].

use crate::client::{
    ChannelKind, EmailJsChannel, EmailJsClient, LeadChannel, WebhookChannel, WebhookClient,
};
use crate::config::Config;
use crate::error::{ChannelError, ChannelResult, DispatchError, DispatchResult};
use crate::metrics::Metrics;
use crate::models::ContactRecord;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Per-channel outcome of one dual-channel dispatch.
#[derive(Debug)]
pub struct DispatchReport {
    pub email: ChannelResult<()>,
    pub webhook: ChannelResult<()>,
}

impl DispatchReport {
    /// True when at least one channel accepted the lead.
    pub fn any_succeeded(&self) -> bool {
        self.email.is_ok() || self.webhook.is_ok()
    }

    /// Fold the two outcomes into the caller-facing result.
    pub fn into_result(self) -> DispatchResult<()> {
        if self.any_succeeded() {
            Ok(())
        } else {
            Err(DispatchError::AllChannelsFailed)
        }
    }
}

/// Sends contact records to the two delivery channels.
///
/// Stateless per call apart from the shared metrics counters, so one
/// dispatcher can serve any number of concurrent submissions.
#[derive(Clone)]
pub struct LeadDispatcher {
    email: Arc<dyn LeadChannel>,
    webhook: Arc<dyn LeadChannel>,
    metrics: Metrics,
}

impl LeadDispatcher {
    /// Create a dispatcher over two channels.
    pub fn new(email: Arc<dyn LeadChannel>, webhook: Arc<dyn LeadChannel>) -> Self {
        Self {
            email,
            webhook,
            metrics: Metrics::new(),
        }
    }

    /// Use an existing metrics collector instead of a fresh one.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Build the production channels from configuration.
    ///
    /// The HTTP clients and the dispatcher share one metrics collector.
    pub fn from_config(config: &Config) -> Self {
        let metrics = Metrics::new();

        let email = EmailJsChannel::new(EmailJsClient::new(config, metrics.clone()));
        let webhook = WebhookChannel::new(WebhookClient::new(config, metrics.clone()));

        Self::new(Arc::new(email), Arc::new(webhook)).with_metrics(metrics)
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Deliver a record through both channels.
    ///
    /// Succeeds if at least one channel accepted it; fails with
    /// [`DispatchError::AllChannelsFailed`] only when both failed.
    pub async fn dispatch(&self, record: ContactRecord) -> DispatchResult<()> {
        self.dispatch_with_report(record).await.into_result()
    }

    /// Deliver a record through both channels and return each outcome.
    pub async fn dispatch_with_report(&self, record: ContactRecord) -> DispatchReport {
        let record = Arc::new(record);

        // Both tasks are running before either is awaited.
        let email_task = spawn_channel(self.email.clone(), record.clone());
        let webhook_task = spawn_channel(self.webhook.clone(), record);

        let (email, webhook) = futures::future::join(
            settle(self.email.kind(), email_task),
            settle(self.webhook.kind(), webhook_task),
        )
        .await;

        self.observe(self.email.kind(), &email);
        self.observe(self.webhook.kind(), &webhook);

        let report = DispatchReport { email, webhook };
        let success = report.any_succeeded();
        self.metrics.record_dispatch(success);

        if success {
            tracing::info!(
                email_ok = report.email.is_ok(),
                webhook_ok = report.webhook.is_ok(),
                "Lead captured"
            );
        } else {
            tracing::error!("Lead lost: every delivery channel failed");
        }

        report
    }

    /// Deliver a record through the webhook channel only.
    ///
    /// Diagnostic mode: the templated-message channel is never touched. Fails
    /// with [`DispatchError::WebhookFailed`] on any webhook failure.
    pub async fn dispatch_webhook_only(&self, record: ContactRecord) -> DispatchResult<()> {
        let kind = self.webhook.kind();
        let outcome = settle(kind, spawn_channel(self.webhook.clone(), Arc::new(record))).await;

        self.observe(kind, &outcome);
        self.metrics.record_dispatch(outcome.is_ok());

        outcome.map_err(|_| DispatchError::WebhookFailed)
    }

    fn observe(&self, kind: ChannelKind, outcome: &ChannelResult<()>) {
        self.metrics.record_channel_outcome(kind, outcome.is_ok());

        if let Err(e) = outcome {
            tracing::warn!(channel = %kind, error = %e, "Delivery channel failed");
        }
    }
}

fn spawn_channel(
    channel: Arc<dyn LeadChannel>,
    record: Arc<ContactRecord>,
) -> JoinHandle<ChannelResult<()>> {
    tokio::spawn(async move { channel.submit(record).await })
}

/// Wait for a channel task; a panic inside it becomes that channel's failure.
async fn settle(kind: ChannelKind, task: JoinHandle<ChannelResult<()>>) -> ChannelResult<()> {
    match task.await {
        Ok(outcome) => outcome,
        Err(e) => Err(ChannelError::TaskFailed(format!("{} channel: {}", kind, e))),
    }
}
