use crate::{ChatRequest, ChatResponse, Error};

/// A service that answers chat completion requests.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send one request and return the decoded response.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error>;
}
