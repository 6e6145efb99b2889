//! Argument payloads for Discord's send and add-files calls.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::embed::Embed;

/// Arguments for sending a message to a text channel or thread.
///
/// `embeds` is `None` when the message carries no links at all, which is
/// different from `Some(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendArguments {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
}

/// One file to attach to an already-sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Where the downloaded bytes live on disk
    pub local_path: PathBuf,
    /// The name Discord should show for the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
