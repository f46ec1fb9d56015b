use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("API returned a null body")]
    NullBody,
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
