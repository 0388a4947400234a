//! Client for the CRM webhook channel.

use super::{build_agent, map_error, read_body};
use crate::config::Config;
use crate::error::{ChannelError, ChannelResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ContactRecord, WebhookPayload};
use std::sync::Arc;

/// Posts contact records as JSON to the configured webhook URL.
#[derive(Clone)]
pub struct WebhookClient {
    url: String,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl WebhookClient {
    /// Create a new WebhookClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        Self {
            url: config.webhook_url.clone(),
            agent: Arc::new(build_agent(config.request_timeout)),
            metrics,
        }
    }

    /// Post the record as `{"data": {...}}`.
    ///
    /// Any 2xx status is acceptance and the response body is ignored.
    pub fn send(&self, record: &ContactRecord) -> ChannelResult<()> {
        let body = serde_json::to_string(&WebhookPayload::from(record))?;

        tracing::debug!(url = %self.url, "POST webhook");

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(map_error)
            .and_then(|response| {
                let status = response.status();
                if (200..300).contains(&status) {
                    Ok(())
                } else {
                    Err(ChannelError::Status {
                        status,
                        body: read_body(response),
                    })
                }
            });

        match &result {
            Ok(()) => timer.complete(),
            Err(e) => {
                tracing::debug!(url = %self.url, error = %e, "Webhook rejected submission");
                timer.complete_with_error();
            }
        }

        result
    }
}
