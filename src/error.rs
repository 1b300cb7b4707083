use thiserror::Error;

use crate::providers::openai::types::OpenAIError;

/// Errors that can occur while asking a question.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API key not found. Please set it in the .env file as 'API'.")]
    MissingCredential,

    #[error("Failed to read input: {0}")]
    InputRead(#[from] std::io::Error),

    #[error("Failed to create request body: {0}")]
    Serialization(serde_json::Error),

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Error::Remote {
            status,
            body: body.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `error.message` field of an OpenAI error body, when the remote
    /// error carries one.
    pub fn remote_message(&self) -> Option<String> {
        match self {
            Error::Remote { body, .. } => serde_json::from_str::<OpenAIError>(body)
                .ok()
                .map(|e| e.error.message),
            _ => None,
        }
    }
}
