use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Track already stored: {0}")]
    DuplicateKey(String),

    #[error("Track has no URL and cannot be stored")]
    MissingTrackUrl,

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Unexpected content type {content_type:?} for {url}")]
    ContentType { url: String, content_type: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl HarvestError {
    /// True for the unique-constraint failure raised when a track URL is already stored.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, HarvestError::DuplicateKey(_))
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
