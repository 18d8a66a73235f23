//! Application execution logic.
//!
//! Turns the parsed command into a card (or raw payload) and hands it to
//! a [`WebhookSender`]: the configured client, or a printer in dry-run mode.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use cardhook::card::{
    Body, BodyElement, CardError, Field, Fields, Head, Message, Style, SubHead, Text, ToWire,
};
use cardhook::config::{Command, SendArgs, ValidatedConfig};
use cardhook::webhook::{WebhookError, WebhookSender};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The card built from the command line is invalid.
    #[error("Invalid card: {0}")]
    Card(#[from] CardError),

    /// Delivery failed.
    #[error("Delivery failed: {0}")]
    Webhook(#[from] WebhookError),

    /// Failed to read a raw payload file.
    #[error("Failed to read payload '{}': {source}", path.display())]
    ReadPayload {
        /// Path to the payload file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A raw payload file is not valid JSON.
    #[error("Payload '{}' is not valid JSON: {source}", path.display())]
    ParsePayload {
        /// Path to the payload file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A `--field` argument is not in `Key=Value` form.
    #[error("Invalid field '{0}': expected 'Key=Value'")]
    InvalidField(String),
}

/// Sender used in dry-run mode: prints the payload to stdout instead of
/// posting it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunSender;

impl DryRunSender {
    fn print(payload: &Value) -> Result<(), WebhookError> {
        let text = serde_json::to_string_pretty(payload).map_err(WebhookError::Encode)?;
        println!("{text}");
        Ok(())
    }
}

impl WebhookSender for DryRunSender {
    async fn send(&self, message: &Message) -> Result<(), WebhookError> {
        let payload = message.to_wire()?;
        Self::print(&payload)
    }

    async fn send_raw(&self, payload: &Value) -> Result<(), WebhookError> {
        Self::print(payload)
    }
}

/// Executes `command` against the configured webhook.
///
/// In dry-run mode the payload is validated and printed but not sent.
///
/// # Errors
///
/// Returns an error if the card is invalid, the payload file cannot be
/// read, or delivery fails.
pub async fn execute(config: &ValidatedConfig, command: &Command) -> Result<(), RunError> {
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - payloads will be printed but not sent");
        dispatch(&DryRunSender, command, config.markdown).await
    } else {
        dispatch(&config.client, command, config.markdown).await
    }
}

async fn dispatch<W: WebhookSender>(
    sender: &W,
    command: &Command,
    markdown: bool,
) -> Result<(), RunError> {
    match command {
        Command::Send(args) => {
            let message = build_message(args, markdown)?;
            sender.send(&message).await?;
            tracing::info!("Card '{}' delivered", args.head);
        }
        Command::SendRaw { file } => {
            let payload = read_payload(file)?;
            sender.send_raw(&payload).await?;
            tracing::info!("Payload from {} delivered", file.display());
        }
        // Handled before configuration is loaded
        Command::Init { .. } => {}
    }
    Ok(())
}

/// Builds a card from `send` arguments.
///
/// The head takes `--color` as its style. Text lines come first in the
/// body, followed by a single fields block when any `--field` was given.
/// No body is attached when neither was given.
///
/// # Errors
///
/// Returns an error if a text line or field argument is invalid.
pub fn build_message(args: &SendArgs, markdown: bool) -> Result<Message, RunError> {
    let mut head = Head::new(&args.head);
    if let Some(color) = &args.color {
        head = head.with_style(Style::new().with_color(color).with_bold(true));
    }
    if let Some(sub_head) = &args.sub_head {
        head = head.with_sub_head(SubHead::new(sub_head));
    }

    let mut elements = args
        .texts
        .iter()
        .map(|line| Text::new(line).map(BodyElement::from))
        .collect::<Result<Vec<_>, _>>()?;

    if !args.fields.is_empty() {
        let fields = args
            .fields
            .iter()
            .map(|raw| parse_field(raw))
            .collect::<Result<Fields, _>>()?;
        elements.push(fields.into());
    }

    let mut message = Message::new().with_markdown(markdown).with_head(head);
    if !elements.is_empty() {
        message = message.with_body(Body::new(elements));
    }
    Ok(message)
}

/// Parses a `Key=Value` argument into a field.
///
/// Only the first `=` separates key from value, and both sides are trimmed.
///
/// # Errors
///
/// Returns [`RunError::InvalidField`] if there is no `=` or the key is empty.
pub fn parse_field(raw: &str) -> Result<Field, RunError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| RunError::InvalidField(raw.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(RunError::InvalidField(raw.to_string()));
    }

    Ok(Field::new(key, value.trim()))
}

fn read_payload(path: &Path) -> Result<Value, RunError> {
    let content = std::fs::read_to_string(path).map_err(|source| RunError::ReadPayload {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RunError::ParsePayload {
        path: path.to_path_buf(),
        source,
    })
}
