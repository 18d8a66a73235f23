//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::defaults;

/// cardhook: send card messages to a chat webhook
///
/// Builds a structured card (head, sub-head, text and key/value fields),
/// validates it and delivers it to the configured webhook endpoint.
#[derive(Debug, Parser)]
#[command(name = "cardhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Webhook endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Auth token, sent verbatim in the Authorization header
    #[arg(long, global = true)]
    pub auth: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Return delivery failures without logging the response body
    #[arg(long = "quiet-failures", global = true)]
    pub quiet_failures: bool,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Print the payload instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for cardhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
    /// Build a card message and send it
    Send(SendArgs),
    /// Send a JSON payload file as-is
    SendRaw {
        /// Path to the JSON payload
        file: PathBuf,
    },
}

/// Card content for the `send` subcommand.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Heading text
    #[arg(long)]
    pub head: String,

    /// Secondary heading text
    #[arg(long = "sub-head")]
    pub sub_head: Option<String>,

    /// Body text line (can be specified multiple times)
    #[arg(long = "text", value_name = "LINE")]
    pub texts: Vec<String>,

    /// Key/value row in 'Key=Value' format (can be specified multiple times)
    #[arg(long = "field", value_name = "K=V")]
    pub fields: Vec<String>,

    /// Heading color as a hex string, e.g. '#2D8CFF'
    #[arg(long)]
    pub color: Option<String>,

    /// Ask the service to render markdown in text elements
    #[arg(long)]
    pub markdown: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }

    /// Returns true if `--markdown` was passed to `send`.
    #[must_use]
    pub const fn markdown(&self) -> bool {
        matches!(&self.command, Command::Send(args) if args.markdown)
    }
}
