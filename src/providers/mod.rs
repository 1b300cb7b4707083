//! Provider implementations for chat completion services.

pub mod openai;

// Re-export commonly used provider types
pub use openai::OpenAIProvider;
