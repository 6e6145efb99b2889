use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Failed to parse Slack export record: {0}")]
    ParseError(String),

    #[error("File has not been downloaded yet: {0}")]
    FileNotDownloaded(String),
}

impl From<serde_json::Error> for MessageError {
    fn from(error: serde_json::Error) -> Self {
        MessageError::ParseError(error.to_string())
    }
}
