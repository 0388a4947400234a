//! Configuration management for the lead dispatcher.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every value has a local-development default; production deployments
//! are expected to override the provider identifiers and the webhook URL.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default EmailJS REST endpoint.
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Configuration for the lead dispatcher.
#[derive(Debug, Clone)]
pub struct Config {
    /// EmailJS public key (sent as `user_id`)
    pub emailjs_public_key: String,

    /// EmailJS service identifier
    pub emailjs_service_id: String,

    /// EmailJS template identifier
    pub emailjs_template_id: String,

    /// EmailJS private key, sent as `accessToken` when set
    pub emailjs_private_key: Option<String>,

    /// EmailJS send endpoint
    pub emailjs_api_url: String,

    /// CRM webhook URL
    pub webhook_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Phone number shown to the visitor when every channel failed
    pub fallback_phone: String,

    /// Email address shown to the visitor when every channel failed
    pub fallback_email: String,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognised variables:
    /// - `EMAILJS_PUBLIC_KEY`, `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PRIVATE_KEY` (optional)
    /// - `EMAILJS_API_URL`
    /// - `LEAD_WEBHOOK_URL`
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `FALLBACK_PHONE`, `FALLBACK_EMAIL`
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() does not print, and a missing file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let emailjs_public_key =
            Self::env_non_empty("EMAILJS_PUBLIC_KEY", defaults.emailjs_public_key)?;
        let emailjs_service_id =
            Self::env_non_empty("EMAILJS_SERVICE_ID", defaults.emailjs_service_id)?;
        let emailjs_template_id =
            Self::env_non_empty("EMAILJS_TEMPLATE_ID", defaults.emailjs_template_id)?;
        let emailjs_api_url = Self::env_url("EMAILJS_API_URL", defaults.emailjs_api_url)?;
        let webhook_url = Self::env_url("LEAD_WEBHOOK_URL", defaults.webhook_url)?;

        let emailjs_private_key = env::var("EMAILJS_PRIVATE_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let fallback_phone = Self::env_non_empty("FALLBACK_PHONE", defaults.fallback_phone)?;
        let fallback_email = Self::env_non_empty("FALLBACK_EMAIL", defaults.fallback_email)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            emailjs_public_key,
            emailjs_service_id,
            emailjs_template_id,
            emailjs_private_key,
            emailjs_api_url,
            webhook_url,
            request_timeout,
            fallback_phone,
            fallback_email,
            log_level,
        })
    }

    /// Read a string variable, rejecting blank values.
    fn env_non_empty(var_name: &str, default: String) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val),
            Err(_) => Ok(default),
        }
    }

    /// Read a URL variable; it must be non-empty and use http(s).
    fn env_url(var_name: &str, default: String) -> ConfigResult<String> {
        let url = Self::env_non_empty(var_name, default)?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        Ok(url)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            emailjs_public_key: "local-dev-public-key".to_string(),
            emailjs_service_id: "service_local_dev".to_string(),
            emailjs_template_id: "template_local_dev".to_string(),
            emailjs_private_key: None,
            emailjs_api_url: DEFAULT_EMAILJS_API_URL.to_string(),
            webhook_url: "http://localhost:8787/webhook".to_string(),
            request_timeout: 10,
            fallback_phone: "046 202 1430".to_string(),
            fallback_email: "info@staycoolairco.nl".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const ALL_VARS: &[&str] = &[
        "EMAILJS_PUBLIC_KEY",
        "EMAILJS_SERVICE_ID",
        "EMAILJS_TEMPLATE_ID",
        "EMAILJS_PRIVATE_KEY",
        "EMAILJS_API_URL",
        "LEAD_WEBHOOK_URL",
        "REQUEST_TIMEOUT",
        "FALLBACK_PHONE",
        "FALLBACK_EMAIL",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        /// Start from a clean slate so a developer's .env cannot leak into assertions.
        fn new() -> Self {
            for var in ALL_VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.emailjs_api_url, DEFAULT_EMAILJS_API_URL);
        assert!(config.emailjs_private_key.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("EMAILJS_PUBLIC_KEY", "pk_test");
        guard.set("EMAILJS_SERVICE_ID", "service_test");
        guard.set("EMAILJS_TEMPLATE_ID", "template_test");
        guard.set("EMAILJS_PRIVATE_KEY", "secret");
        guard.set("LEAD_WEBHOOK_URL", "https://hooks.example.com/lead");
        guard.set("REQUEST_TIMEOUT", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.emailjs_public_key, "pk_test");
        assert_eq!(config.emailjs_service_id, "service_test");
        assert_eq!(config.emailjs_template_id, "template_test");
        assert_eq!(config.emailjs_private_key.as_deref(), Some("secret"));
        assert_eq!(config.webhook_url, "https://hooks.example.com/lead");
        assert_eq!(config.request_timeout, 5);
    }

    #[test]
    #[serial]
    fn test_config_fallback_contact_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("FALLBACK_PHONE", "043 711 00 89");
        guard.set("FALLBACK_EMAIL", "offerte@example.nl");

        let config = Config::from_env().unwrap();
        assert_eq!(config.fallback_phone, "043 711 00 89");
        assert_eq!(config.fallback_email, "offerte@example.nl");
    }

    #[test]
    #[serial]
    fn test_config_invalid_webhook_url() {
        let mut guard = EnvGuard::new();
        guard.set("LEAD_WEBHOOK_URL", "not-a-url");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LEAD_WEBHOOK_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_blank_service_id() {
        let mut guard = EnvGuard::new();
        guard.set("EMAILJS_SERVICE_ID", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "EMAILJS_SERVICE_ID"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_timeout_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("REQUEST_TIMEOUT", "0");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_blank_private_key_is_ignored() {
        let mut guard = EnvGuard::new();
        guard.set("EMAILJS_PRIVATE_KEY", " ");

        let config = Config::from_env().unwrap();
        assert!(config.emailjs_private_key.is_none());
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_TIMEOUT_INVALID", "ten");

        let result = Config::parse_env_u64("TEST_TIMEOUT_INVALID", 10);
        assert!(result.is_err());

        let result = Config::parse_env_u64("NONEXISTENT_TIMEOUT", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
