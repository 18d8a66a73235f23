//! Configuration layer for the cardhook binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`SendArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! The card and webhook modules never read configuration themselves;
//! everything they need is passed in explicitly.
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! `endpoint` and `auth` have no default and must come from one of the
//! first two sources.
//!
//! # Boolean Flag Semantics
//!
//! `--markdown` uses OR semantics with `message.markdown`: set in either
//! place, markdown is requested. `--quiet-failures` always wins over
//! `webhook.verbose_failures`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, SendArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
