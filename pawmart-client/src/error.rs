use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
