//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::webhook::{FailureReporting, ReqwestClient, WebhookClient};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The endpoint is checked by building the [`WebhookClient`] up front, so an
/// invalid endpoint is reported before any network call. The timeout and
/// failure reporting mode live on the client.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook client bound to the configured endpoint and auth token
    pub client: WebhookClient<ReqwestClient>,

    /// Whether sent cards request markdown rendering
    pub markdown: bool,

    /// Dry-run mode (print payloads without sending)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ endpoint: {}, timeout: {}s, failure_reporting: {:?}, markdown: {}, dry_run: {} }}",
            self.client.endpoint(),
            self.client
                .http_client()
                .timeout()
                .unwrap_or_else(defaults::timeout)
                .as_secs(),
            self.client.failure_reporting(),
            self.markdown,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`endpoint`, `auth`)
    /// - The endpoint is not a valid URL or the auth token is not a valid header value
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let endpoint = Self::resolve_endpoint(cli, toml)?;
        let auth = Self::resolve_auth(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let failure_reporting = Self::resolve_failure_reporting(cli, toml);

        // Flags only enable: set in either source means on
        let markdown = cli.markdown() || toml.is_some_and(|t| t.message.markdown);

        let http = ReqwestClient::with_timeout(timeout).map_err(ConfigError::HttpClient)?;
        let client = WebhookClient::with_client(http, endpoint, auth)
            .map_err(ConfigError::InvalidWebhook)?
            .with_failure_reporting(failure_reporting);

        Ok(Self {
            client,
            markdown,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_endpoint<'a>(
        cli: &'a Cli,
        toml: Option<&'a TomlConfig>,
    ) -> Result<&'a str, ConfigError> {
        cli.endpoint
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.endpoint.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::ENDPOINT,
                    "Use --endpoint or set webhook.endpoint in config file",
                )
            })
    }

    fn resolve_auth<'a>(cli: &'a Cli, toml: Option<&'a TomlConfig>) -> Result<&'a str, ConfigError> {
        cli.auth
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.auth.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::AUTH, "Use --auth or set webhook.auth in config file")
            })
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.delivery.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_failure_reporting(cli: &Cli, toml: Option<&TomlConfig>) -> FailureReporting {
        let verbose = !cli.quiet_failures
            && toml
                .and_then(|t| t.webhook.verbose_failures)
                .unwrap_or(defaults::VERBOSE_FAILURES);

        if verbose {
            FailureReporting::Verbose
        } else {
            FailureReporting::Silent
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
