//! Ask a hosted chat-completion model a single question.
//!
//! The library holds the request/response exchange with the OpenAI chat
//! completions API; the `chatquery` binary wires it to the terminal.

pub mod dispatcher;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod providers;
pub mod types;

// Re-export core types for easy usage
pub use dispatcher::{dispatch, Answer, Dispatcher};
pub use error::Error;
pub use prompt::read_query;
pub use provider::ChatProvider;
pub use providers::*;
pub use types::*;
