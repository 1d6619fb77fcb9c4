use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("invalid value for {var}: {reason}")]
    Config { var: &'static str, reason: String },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to chat endpoint failed")]
    Network(#[from] reqwest::Error),

    #[error("chat endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("chat response is not a valid envelope")]
    Envelope(#[source] serde_json::Error),

    #[error("model output is not valid JSON")]
    Content(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QueryError>;
