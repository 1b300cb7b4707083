//! Turns one query into one answer.

use std::fmt;

use tracing::{debug, info};

use crate::provider::ChatProvider;
use crate::providers::OpenAIProvider;
use crate::{ChatRequest, Config, Error};

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Content of the first choice.
    Text(String),
    /// The service returned zero choices.
    NoAnswer,
}

impl Answer {
    pub fn text(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            Answer::NoAnswer => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(text) => write!(f, "ChatGPT Response: {text}"),
            Answer::NoAnswer => f.write_str("No response from ChatGPT."),
        }
    }
}

/// Builds chat requests and interprets the responses.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    model: String,
    base_url: String,
}

impl Default for Dispatcher {
    fn default() -> Self {
        let config = Config::new(String::new());
        Self {
            model: config.model,
            base_url: config.base_url,
        }
    }
}

impl Dispatcher {
    /// Take model and endpoint from the config. The credential is passed to
    /// [`Dispatcher::dispatch`] separately.
    pub fn new(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// A request with a single user message carrying `query` verbatim.
    pub fn build_request(&self, query: &str) -> ChatRequest {
        ChatRequest::user(self.model.as_str(), query)
    }

    /// Ask the OpenAI endpoint one question.
    ///
    /// Fails with [`Error::MissingCredential`] before any network I/O when
    /// `credential` is empty.
    pub async fn dispatch(&self, query: &str, credential: &str) -> Result<Answer, Error> {
        if credential.is_empty() {
            return Err(Error::MissingCredential);
        }
        let provider =
            OpenAIProvider::new_with_base_url(credential.to_string(), self.base_url.clone())?;
        self.dispatch_with(&provider, query).await
    }

    /// Ask any provider one question.
    pub async fn dispatch_with<P>(&self, provider: &P, query: &str) -> Result<Answer, Error>
    where
        P: ChatProvider + ?Sized,
    {
        let request = self.build_request(query);
        info!(model = %request.model, "dispatching query");

        let response = provider.complete(&request).await?;
        debug!(choices = response.choices.len(), "decoded response");

        Ok(match response.first_content() {
            Some(content) => Answer::Text(content.to_string()),
            None => Answer::NoAnswer,
        })
    }
}

/// Ask the default model one question.
pub async fn dispatch(query: &str, credential: &str) -> Result<Answer, Error> {
    Dispatcher::default().dispatch(query, credential).await
}
