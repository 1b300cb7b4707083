use crate::provider::ChatProvider;
use crate::types::DEFAULT_BASE_URL;
use crate::{ChatRequest, ChatResponse, Error};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

/// OpenAI chat completions provider.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with custom base URL.
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        if api_key.is_empty() {
            return Err(Error::MissingCredential);
        }

        // Transport defaults apply; no timeout override.
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenAIProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
        let body = serde_json::to_vec(request).map_err(Error::Serialization)?;
        let url = self.endpoint();

        debug!(%url, model = %request.model, bytes = body.len(), "sending chat request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        // Reading the body to the end releases the connection on every path.
        let text = response.text().await?;

        debug!(status = status.as_u16(), bytes = text.len(), "received chat response");

        if !status.is_success() {
            return Err(Error::remote(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(Error::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OpenAIProvider::new("test-key".to_string());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let provider = OpenAIProvider::new(String::new());
        assert!(matches!(provider, Err(Error::MissingCredential)));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let provider = OpenAIProvider::new("test-key".to_string()).unwrap();
        assert_eq!(
            provider.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );

        let provider = OpenAIProvider::new_with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:9000/v1/".to_string(),
        )
        .unwrap();
        assert_eq!(provider.endpoint(), "http://127.0.0.1:9000/v1/chat/completions");
    }
}
