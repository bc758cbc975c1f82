//! Failures of a single prediction request.
//!
//! The `Display` text of every variant is exactly what the display region
//! shows after `An error occurred: `.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status. The body is not read.
    #[error("Network response was not ok")]
    Status(StatusCode),

    /// The body was not a usable JSON prediction payload.
    #[error("{0}")]
    Decode(String),
}

impl PredictError {
    /// Build a transport error from `error`, keeping the messages of its
    /// whole source chain.
    pub fn transport(error: impl std::error::Error) -> Self {
        Self::Transport(error_chain_message(&error))
    }
}

fn error_chain_message(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim
        if !message.ends_with(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

impl From<serde_json::Error> for PredictError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
