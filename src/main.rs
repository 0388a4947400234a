//! Airco Leads - command line front end.
//!
//! Takes one contact-form submission (flags or a JSON file), checks it the way
//! the website form does, and hands it to the lead dispatcher. `--webhook-only`
//! runs the webhook diagnostic instead of the dual-channel dispatch.

use airco_leads::error::DispatchResult;
use airco_leads::{Config, ContactForm, DispatchError, LeadDispatcher};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "airco-leads",
    version,
    about = "Submit a contact-form lead to EmailJS and the CRM webhook"
)]
struct Cli {
    /// Visitor name
    #[arg(long)]
    name: Option<String>,

    /// Visitor email address
    #[arg(long)]
    email: Option<String>,

    /// Visitor phone number
    #[arg(long)]
    phone: Option<String>,

    /// Visitor city (optional)
    #[arg(long)]
    city: Option<String>,

    /// Message text
    #[arg(long)]
    message: Option<String>,

    /// Read the form as JSON from a file, or "-" for stdin
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["name", "email", "phone", "city", "message"]
    )]
    json: Option<PathBuf>,

    /// Only post to the webhook (diagnostic mode)
    #[arg(long)]
    webhook_only: bool,
}

impl Cli {
    fn into_form(self) -> Result<ContactForm> {
        let Some(path) = self.json else {
            return Ok(ContactForm {
                name: self.name.unwrap_or_default(),
                email: self.email.unwrap_or_default(),
                phone: self.phone.unwrap_or_default(),
                city: self.city,
                message: self.message.unwrap_or_default(),
            });
        };

        let raw = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read form from stdin")?;
            buf
        } else {
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read form from {}", path.display()))?
        };

        serde_json::from_str(&raw).context("Form JSON is malformed")
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let webhook_only = cli.webhook_only;

    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so stdout only carries the visitor-facing message
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let record = cli
        .into_form()?
        .validate()
        .context("Contact form is incomplete")?;

    let dispatcher = LeadDispatcher::from_config(&config);

    let outcome = if webhook_only {
        info!(url = %config.webhook_url, "Running webhook-only diagnostic");
        dispatcher.dispatch_webhook_only(record).await
    } else {
        dispatcher.dispatch(record).await
    };
    info!(summary = ?dispatcher.metrics().summary(), "Dispatch finished");

    if let Err(e) = &outcome {
        error!("{}", e);
    }

    let (lines, success) = render_outcome(webhook_only, &outcome, &config);
    for line in lines {
        println!("{}", line);
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Visitor-facing lines for a dispatch outcome, and whether it counts as success.
fn render_outcome(
    webhook_only: bool,
    outcome: &DispatchResult<()>,
    config: &Config,
) -> (Vec<String>, bool) {
    match outcome {
        Ok(()) if webhook_only => (
            vec!["Webhook Success! Data was successfully sent to the webhook.".to_string()],
            true,
        ),
        Ok(()) => (
            vec![
                "Bedankt voor uw bericht!".to_string(),
                "We hebben uw aanvraag ontvangen en nemen zo spoedig mogelijk contact met u op."
                    .to_string(),
            ],
            true,
        ),
        Err(DispatchError::WebhookFailed) => {
            (vec![DispatchError::WebhookFailed.to_string()], false)
        }
        Err(DispatchError::AllChannelsFailed) => (
            vec![
                "Er is iets misgegaan bij het versturen van uw bericht.".to_string(),
                "Neem direct contact met ons op:".to_string(),
                format!("Tel: {}", config.fallback_phone),
                format!("Email: {}", config.fallback_email),
            ],
            false,
        ),
    }
}
