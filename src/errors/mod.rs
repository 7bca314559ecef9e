use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    // Source registry errors
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    #[error("Sources file error: {0}")]
    SourcesFile(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Output errors
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MergeResult<T> = Result<T, MergeError>;
