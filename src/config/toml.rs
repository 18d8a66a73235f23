//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Delivery configuration section
    #[serde(default)]
    pub delivery: DeliverySection,

    /// Message defaults section
    #[serde(default)]
    pub message: MessageSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook endpoint URL
    pub endpoint: Option<String>,

    /// Auth token for the Authorization header
    pub auth: Option<String>,

    /// Log the response body of failed deliveries (default: true)
    pub verbose_failures: Option<bool>,
}

/// Delivery configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeliverySection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// Message defaults section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Request markdown rendering for every card
    #[serde(default)]
    pub markdown: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# cardhook Configuration File

[webhook]
# Webhook endpoint URL (required, can be overridden by --endpoint)
# endpoint = "https://chat.example.com/v1/im/webhook"

# Auth token, sent verbatim in the Authorization header (required, --auth)
# auth = "your-token-here"

# Log the response body when a delivery fails (default: true)
# --quiet-failures turns this off
# verbose_failures = true

[delivery]
# Request timeout in seconds (default: 30)
# timeout = 30

[message]
# Ask the service to render markdown in text elements
# Note: --markdown on the send command also enables it
# markdown = false
"##
    .to_string()
}
