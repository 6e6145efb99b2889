//! The intermediate message record built from a Slack export.
//!
//! A [`ParsedMessage`] is neither exactly a Slack message nor exactly a Discord
//! message. Field names follow Slack conventions, and the two conversion methods
//! translate them into the argument shapes Discord expects.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{Level, debug, enabled, info, warn};

use crate::discord::{Embed, FileUpload, SendArguments};
use crate::errors::MessageError;
use crate::slack_parser::{SlackAttachment, SlackFile, unescape_url};

/// Maximum number of embeds Discord accepts on a single message
pub const MAX_DISCORD_EMBEDS: usize = 10;

/// Render an optional value for a `key=value` style representation.
///
/// Real strings are quoted, absent values are written bare, so a value that is
/// literally the string `None` can be told apart from a missing one.
///
/// # Examples
///
/// ```
/// use slack2discord::message::str_or_none;
///
/// assert_eq!(str_or_none(None::<&str>), "None");
/// assert_eq!(str_or_none(Some("x")), "'x'");
/// ```
#[must_use]
pub fn str_or_none<T: fmt::Display>(val: Option<T>) -> String {
    match val {
        Some(v) => format!("'{v}'"),
        None => "None".to_string(),
    }
}

/// A single message that has been parsed from a Slack export.
#[derive(Debug, Clone, Default)]
pub struct ParsedMessage {
    text: String,
    links: Vec<MessageLink>,
    files: Vec<MessageFile>,
}

impl ParsedMessage {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            links: Vec::new(),
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn links(&self) -> &[MessageLink] {
        &self.links
    }

    #[must_use]
    pub fn files(&self) -> &[MessageFile] {
        &self.files
    }

    /// Mutable access for the downloader, which fills in each file's local path.
    pub fn files_mut(&mut self) -> &mut [MessageFile] {
        &mut self.files
    }

    /// Add a Slack attachment as a link. URL fields are unescaped before storage.
    pub fn add_link(&mut self, attachment: SlackAttachment) {
        let link = MessageLink {
            title: attachment.title,
            title_link: unescape_url(attachment.title_link.as_deref()),
            text: attachment.text,
            service_name: attachment.service_name,
            service_icon: unescape_url(attachment.service_icon.as_deref()),
            image_url: unescape_url(attachment.image_url.as_deref()),
            thumb_url: unescape_url(attachment.thumb_url.as_deref()),
        };

        if enabled!(Level::DEBUG) {
            debug!("Link added to parsed message: {}", link);
        } else {
            info!(
                "Link added to parsed message: {}",
                link.title_link.as_deref().unwrap_or_default()
            );
        }

        self.links.push(link);
    }

    /// Add a Slack file. `url_private` is unescaped and stored as the file URL.
    pub fn add_file(&mut self, file: SlackFile) {
        let file = MessageFile::new(
            file.id,
            file.name,
            unescape_url(file.url_private.as_deref()),
        );

        if enabled!(Level::DEBUG) {
            debug!("File added to parsed message: {}", file);
        } else {
            info!(
                "File added to parsed message: {}",
                file.name.as_deref().unwrap_or_default()
            );
        }

        self.files.push(file);
    }

    /// Number of links that [`send_arguments`](Self::send_arguments) leaves out
    /// because of Discord's embed cap.
    #[must_use]
    pub fn dropped_link_count(&self) -> usize {
        self.links.len().saturating_sub(MAX_DISCORD_EMBEDS)
    }

    /// Build the arguments for sending this message to a Discord channel or thread.
    ///
    /// Slack attachments become embeds. Only the first [`MAX_DISCORD_EMBEDS`] links
    /// are kept; the rest are dropped with a warning.
    #[must_use]
    pub fn send_arguments(&self) -> SendArguments {
        if self.links.is_empty() {
            return SendArguments {
                content: self.text.clone(),
                embeds: None,
            };
        }

        if self.links.len() > MAX_DISCORD_EMBEDS {
            warn!(
                "Number of links ({}) exceeds the Discord max ({}), truncating list",
                self.links.len(),
                MAX_DISCORD_EMBEDS
            );
        }

        let embeds = self
            .links
            .iter()
            .take(MAX_DISCORD_EMBEDS)
            .map(MessageLink::to_embed)
            .collect();

        SendArguments {
            content: self.text.clone(),
            embeds: Some(embeds),
        }
    }

    /// Build the list of files to attach to the sent message.
    ///
    /// Returns `Ok(None)` when there are no files. Every file must have been
    /// downloaded first; otherwise the first one missing is reported.
    pub fn add_files_arguments(&self) -> Result<Option<Vec<FileUpload>>, MessageError> {
        if self.files.is_empty() {
            return Ok(None);
        }

        self.files
            .iter()
            .map(|file| {
                file.local_filename
                    .clone()
                    .map(|local_path| FileUpload {
                        // the bytes to upload, and the name Discord shows for them
                        local_path,
                        display_name: file.name.clone(),
                    })
                    .ok_or_else(|| MessageError::FileNotDownloaded(file.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

impl fmt::Display for ParsedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParsedMessage(text='{}', links=[", self.text)?;
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{link}")?;
        }
        f.write_str("], files=[")?;
        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{file}")?;
        }
        f.write_str("])")
    }
}

/// Properties from an exported Slack attachment, named the way Slack names them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLink {
    title: Option<String>,
    title_link: Option<String>,
    text: Option<String>,
    service_name: Option<String>,
    service_icon: Option<String>,
    image_url: Option<String>,
    thumb_url: Option<String>,
}

impl MessageLink {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn title_link(&self) -> Option<&str> {
        self.title_link.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    #[must_use]
    pub fn service_icon(&self) -> Option<&str> {
        self.service_icon.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn thumb_url(&self) -> Option<&str> {
        self.thumb_url.as_deref()
    }

    // Slack terminology goes in, Discord terminology comes out
    fn to_embed(&self) -> Embed {
        let mut embed = Embed::new(
            self.title.clone(),
            self.title_link.clone(),
            self.text.clone(),
        );

        // empty strings count as absent for the optional blocks
        let service_name = non_empty(self.service_name.as_deref());
        let service_icon = non_empty(self.service_icon.as_deref());

        if service_name.is_some() || service_icon.is_some() {
            embed = embed.with_author(service_name, service_icon);
        }
        if let Some(url) = non_empty(self.image_url.as_deref()) {
            embed = embed.with_image(url);
        }
        if let Some(url) = non_empty(self.thumb_url.as_deref()) {
            embed = embed.with_thumbnail(url);
        }

        embed
    }
}

fn non_empty(val: Option<&str>) -> Option<String> {
    val.filter(|s| !s.is_empty()).map(str::to_string)
}

impl fmt::Display for MessageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MessageLink(title={}, title_link={}, text={}, service_name={}, \
             service_icon={}, image_url={}, thumb_url={})",
            str_or_none(self.title.as_deref()),
            str_or_none(self.title_link.as_deref()),
            str_or_none(self.text.as_deref()),
            str_or_none(self.service_name.as_deref()),
            str_or_none(self.service_icon.as_deref()),
            str_or_none(self.image_url.as_deref()),
            str_or_none(self.thumb_url.as_deref()),
        )
    }
}

/// Properties from an exported Slack message to support an attached file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFile {
    id: Option<String>,
    name: Option<String>,
    /// `url_private` in Slack
    url: Option<String>,
    // set later, once the file is downloaded
    local_filename: Option<PathBuf>,
}

impl MessageFile {
    #[must_use]
    pub fn new(id: Option<String>, name: Option<String>, url: Option<String>) -> Self {
        Self {
            id,
            name,
            url,
            local_filename: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn local_filename(&self) -> Option<&Path> {
        self.local_filename.as_deref()
    }

    #[must_use]
    pub fn is_downloaded(&self) -> bool {
        self.local_filename.is_some()
    }

    /// Record where the downloader put this file on disk.
    pub fn set_local_filename(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        debug!(
            "Local file for {}: {}",
            self.id.as_deref().unwrap_or_default(),
            path.display()
        );
        self.local_filename = Some(path);
    }
}

impl fmt::Display for MessageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MessageFile(id={}, name={}, url={}, local_filename={})",
            str_or_none(self.id.as_deref()),
            str_or_none(self.name.as_deref()),
            str_or_none(self.url.as_deref()),
            str_or_none(self.local_filename.as_deref().map(Path::display)),
        )
    }
}
