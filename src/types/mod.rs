//! Core types used throughout the library.

pub mod chat;
pub mod config;
pub mod message;

// Re-export commonly used types
pub use chat::*;
pub use config::*;
pub use message::*;
