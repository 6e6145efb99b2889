/// slack2discord - the message conversion core of a Slack export to Discord importer.
///
/// Each message read from a Slack export is turned into a [`message::ParsedMessage`],
/// which then produces the arguments for Discord's "send message" and "add files"
/// calls.
///
/// # Architecture
///
/// - `slack_parser` holds the Slack-side input records and the URL unescaper
/// - `message` holds the intermediate record and the Slack to Discord mapping
/// - `discord` holds the output argument types
///
/// Walking the export, downloading files and talking to Discord are left to the
/// caller.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use slack2discord::message::ParsedMessage;
/// use slack2discord::slack_parser::{SlackAttachment, SlackFile};
///
/// # fn main() -> Result<(), slack2discord::errors::MessageError> {
/// let raw = json!({
///     "text": "release notes",
///     "attachments": [{"title": "v1.0", "title_link": "https://example.com/?v=1&amp;lang=en"}],
///     "files": [{"id": "F1", "name": "notes.pdf", "url_private": "https://files.slack.com/notes.pdf"}]
/// });
///
/// let mut message = ParsedMessage::new(raw["text"].as_str().unwrap_or_default());
/// for attachment in raw["attachments"].as_array().into_iter().flatten() {
///     message.add_link(SlackAttachment::from_value(attachment)?);
/// }
/// for file in raw["files"].as_array().into_iter().flatten() {
///     message.add_file(SlackFile::from_value(file)?);
/// }
///
/// // the downloader fills in where each file landed
/// for file in message.files_mut() {
///     file.set_local_filename("/tmp/slack2discord/notes.pdf");
/// }
///
/// let send = message.send_arguments();
/// assert_eq!(send.content, "release notes");
/// assert_eq!(send.embeds.unwrap()[0].url.as_deref(), Some("https://example.com/?v=1&lang=en"));
///
/// let uploads = message.add_files_arguments()?.unwrap_or_default();
/// assert_eq!(uploads[0].display_name.as_deref(), Some("notes.pdf"));
/// # Ok(())
/// # }
/// ```
// Module declarations
pub mod core;
pub mod discord;
pub mod errors;
pub mod message;
pub mod slack_parser;

use crate::core::config::{AppConfig, LogFormat};

/// Configure structured logging from the environment.
///
/// Reads [`AppConfig::from_env`]; an invalid setting falls back to the defaults
/// (JSON output at `info`) and is reported once logging is up.
///
/// # Example
///
/// ```
/// slack2discord::setup_logging();
/// ```
pub fn setup_logging() {
    match AppConfig::from_env() {
        Ok(config) => setup_logging_with(&config),
        Err(e) => {
            setup_logging_with(&AppConfig::default());
            tracing::warn!("Invalid logging configuration, using defaults: {}", e);
        }
    }
}

/// Install a global `tracing` subscriber for the given configuration.
///
/// If a subscriber is already installed it is left in place.
pub fn setup_logging_with(config: &AppConfig) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
