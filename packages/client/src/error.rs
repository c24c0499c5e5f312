//! Client error definitions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("server URL cannot be empty")]
    EmptyServerUrl,
}
