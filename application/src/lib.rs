//! Application layer for recipe-chat
//!
//! This crate contains the chat session use case and the port definitions
//! it talks through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession, StreamHandle},
    progress::{ChatProgressNotifier, NoProgress},
};
pub use use_cases::chat_session::{ChatSession, StartSessionError};
