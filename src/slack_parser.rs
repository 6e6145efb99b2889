use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::MessageError;

/// A link attachment as it appears in a Slack export message.
/// Slack calls these "attachments"; each one becomes a Discord embed.
/// Every field is optional, and keys this crate does not use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlackAttachment {
    pub title: Option<String>,
    pub title_link: Option<String>,
    pub text: Option<String>,
    pub service_name: Option<String>,
    pub service_icon: Option<String>,
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
}

impl SlackAttachment {
    /// Converts a raw attachment object from the export.
    ///
    /// Missing and `null` keys become `None`. A key holding anything other than a
    /// string is rejected rather than silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use slack2discord::slack_parser::SlackAttachment;
    ///
    /// let raw = json!({"title": "Rust", "title_link": "https://rust-lang.org", "id": 1});
    /// let attachment = SlackAttachment::from_value(&raw).unwrap();
    /// assert_eq!(attachment.title.as_deref(), Some("Rust"));
    /// assert!(attachment.image_url.is_none());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, MessageError> {
        require_object(value, "attachment")?;
        Ok(Self::deserialize(value)?)
    }
}

/// A file entry from a Slack export message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlackFile {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Slack's authenticated download URL
    pub url_private: Option<String>,
}

impl SlackFile {
    /// Converts a raw file object from the export, with the same rules as
    /// [`SlackAttachment::from_value`].
    pub fn from_value(value: &Value) -> Result<Self, MessageError> {
        require_object(value, "file")?;
        Ok(Self::deserialize(value)?)
    }
}

// Derived deserializers also accept sequences, filling fields by position
fn require_object(value: &Value, kind: &str) -> Result<(), MessageError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(MessageError::ParseError(format!(
            "expected a JSON object for a Slack {kind}, got {value}"
        )))
    }
}

/// Undo the HTML entity escaping Slack applies to URLs in its exports.
///
/// Slack writes `&` as `&amp;` (and `<`, `>` as `&lt;`, `&gt;`), which breaks query
/// strings if passed through as-is. `None` stays `None`.
///
/// # Examples
///
/// ```
/// use slack2discord::slack_parser::unescape_url;
///
/// let url = unescape_url(Some("https://example.com/?a=1&amp;b=2"));
/// assert_eq!(url.as_deref(), Some("https://example.com/?a=1&b=2"));
/// assert_eq!(unescape_url(None), None);
/// ```
#[must_use]
pub fn unescape_url(url: Option<&str>) -> Option<String> {
    url.map(|u| html_escape::decode_html_entities(u).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unescape_url_decodes_entities() {
        assert_eq!(
            unescape_url(Some("https://x.com/?q=a&amp;r=b&amp;s=c")).as_deref(),
            Some("https://x.com/?q=a&r=b&s=c")
        );
        assert_eq!(
            unescape_url(Some("https://x.com/&lt;path&gt;")).as_deref(),
            Some("https://x.com/<path>")
        );
    }

    #[test]
    fn test_unescape_url_leaves_plain_urls_alone() {
        let url = "https://files.slack.com/files-pri/T1-F1/report.pdf";
        assert_eq!(unescape_url(Some(url)).as_deref(), Some(url));
    }

    #[test]
    fn test_attachment_from_value_null_and_missing() {
        let raw = json!({"title": null, "text": "hello"});
        let attachment = SlackAttachment::from_value(&raw).unwrap();
        assert!(attachment.title.is_none());
        assert!(attachment.title_link.is_none());
        assert_eq!(attachment.text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_attachment_from_value_rejects_wrong_type() {
        let raw = json!({"title": 42});
        let err = SlackAttachment::from_value(&raw).unwrap_err();
        assert!(matches!(err, MessageError::ParseError(_)));
    }

    #[test]
    fn test_file_from_value_rejects_non_object() {
        let raw = json!(["F123", "name.png"]);
        assert!(SlackFile::from_value(&raw).is_err());
    }

    #[test]
    fn test_attachment_from_value_rejects_non_object() {
        let raw = json!(["Rust", "https://rust-lang.org/?a=1&amp;b=2"]);
        let err = SlackAttachment::from_value(&raw).unwrap_err();
        assert!(matches!(err, MessageError::ParseError(_)));

        assert!(SlackAttachment::from_value(&json!("https://rust-lang.org")).is_err());
        assert!(SlackAttachment::from_value(&Value::Null).is_err());
    }

    #[test]
    fn test_file_from_value_ignores_extra_keys() {
        let raw = json!({
            "id": "F123",
            "name": "diagram.png",
            "url_private": "https://files.slack.com/diagram.png",
            "mimetype": "image/png",
            "size": 2048
        });
        let file = SlackFile::from_value(&raw).unwrap();
        assert_eq!(file.id.as_deref(), Some("F123"));
        assert_eq!(file.name.as_deref(), Some("diagram.png"));
    }
}
