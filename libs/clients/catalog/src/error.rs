use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request was superseded or the controller was unmounted.
    #[error("Request cancelled")]
    Cancelled,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch items: {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
