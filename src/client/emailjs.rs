//! Client for the EmailJS REST API (templated-message channel).

use super::{build_agent, map_error, read_body};
use crate::config::Config;
use crate::error::{ChannelError, ChannelResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ContactRecord, TemplateParams};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// Upper bound (exclusive) of the decorrelation token.
const CONTACT_NUMBER_RANGE: u32 = 100_000;

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Sends contact records through an EmailJS template.
///
/// Replaces the browser SDK's global `init` call: the public key and the
/// service/template identifiers live on this object, built once at startup.
/// Server-side calls require "API access from non-browser environments" to be
/// enabled on the EmailJS account.
#[derive(Clone)]
pub struct EmailJsClient {
    api_url: String,
    public_key: String,
    service_id: String,
    template_id: String,
    private_key: Option<String>,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl EmailJsClient {
    /// Create a new EmailJsClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        Self {
            api_url: config.emailjs_api_url.clone(),
            public_key: config.emailjs_public_key.clone(),
            service_id: config.emailjs_service_id.clone(),
            template_id: config.emailjs_template_id.clone(),
            private_key: config.emailjs_private_key.clone(),
            agent: Arc::new(build_agent(config.request_timeout)),
            metrics,
        }
    }

    /// Send a record with a fresh random decorrelation token.
    pub fn send(&self, record: &ContactRecord) -> ChannelResult<()> {
        let contact_number = rand::rng().random_range(0..CONTACT_NUMBER_RANGE);
        self.send_with_token(record, contact_number)
    }

    /// Send a record with a caller-chosen decorrelation token.
    ///
    /// Only a 200 response counts as accepted; EmailJS answers `200 OK` for
    /// every queued message.
    pub fn send_with_token(
        &self,
        record: &ContactRecord,
        contact_number: u32,
    ) -> ChannelResult<()> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams::new(record, contact_number),
            access_token: self.private_key.as_deref(),
        };
        let body = serde_json::to_string(&request)?;

        tracing::debug!(url = %self.api_url, contact_number, "POST templated message");

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .post(&self.api_url)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(map_error)
            .and_then(|response| match response.status() {
                200 => Ok(()),
                status => Err(ChannelError::Status {
                    status,
                    body: read_body(response),
                }),
            });

        match &result {
            Ok(()) => timer.complete(),
            Err(e) => {
                tracing::debug!(url = %self.api_url, error = %e, "Templated message rejected");
                timer.complete_with_error();
            }
        }

        result
    }
}
