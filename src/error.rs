use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx response from the styling service; displays the remote error
    /// body verbatim.
    #[error("{0}")]
    Service(String),

    /// The generation response did not contain an `imageUrl` field.
    #[error("Failed to get image URL")]
    MissingImageUrl,

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Decode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, QrError>;

impl QrError {
    /// Flattens an error into the message form the generation surface
    /// reports: the missing-field case keeps its fixed message, everything
    /// else is prefixed with `Error: `.
    pub(crate) fn into_message(self) -> String {
        match self {
            QrError::MissingImageUrl => "Failed to get image URL".to_string(),
            other => format!("Error: {}", other),
        }
    }
}
