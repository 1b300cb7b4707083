use std::env;

use crate::Error;

/// Model used when nothing overrides it.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI API root; the chat endpoint is `{base_url}/chat/completions`.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key.
pub const CREDENTIAL_VAR: &str = "API";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Resolved runtime configuration.
#[derive(Clone)]
pub struct Config {
    pub credential: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("credential", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Create configuration with the default model and endpoint.
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create configuration from environment variables, loading `.env` first
    /// when one exists in the working directory.
    pub fn from_env() -> Result<Self, Error> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("no .env file found"),
            Err(e) => return Err(Error::config(format!("failed to load .env: {e}"))),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = lookup(CREDENTIAL_VAR)
            .filter(|value| !value.is_empty())
            .ok_or(Error::MissingCredential)?;

        let mut config = Self::new(credential);

        if let Some(model) = lookup(MODEL_VAR) {
            config = config.with_model(model)?;
        }
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            if base_url.is_empty() {
                return Err(Error::config(format!("{BASE_URL_VAR} is set but empty")));
            }
            config.base_url = base_url;
        }

        Ok(config)
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Result<Self, Error> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(Error::config("model name must not be empty"));
        }
        self.model = model;
        Ok(self)
    }
}
