use serde::{Deserialize, Serialize};

/// A rich content card attached to a Discord message.
///
/// Only the fields that can be filled from a Slack attachment are modelled.
/// Absent fields are left out of the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
}

/// The author line shown at the top of an embed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Image or thumbnail block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMedia {
    pub url: String,
}

impl Embed {
    #[must_use]
    pub fn new(
        title: Option<String>,
        url: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            title,
            url,
            description,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_author(mut self, name: Option<String>, icon_url: Option<String>) -> Self {
        self.author = Some(EmbedAuthor { name, icon_url });
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: String) -> Self {
        self.image = Some(EmbedMedia { url });
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, url: String) -> Self {
        self.thumbnail = Some(EmbedMedia { url });
        self
    }
}
