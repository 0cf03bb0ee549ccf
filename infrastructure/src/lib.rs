//! Infrastructure layer for recipe-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and credential loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigError, ConfigLoader, ConfigValidationError, CredentialResolver, FileConfig,
    FileGeminiConfig, FileReplConfig,
};
pub use gemini::{
    error::{GeminiError, Result},
    gateway::{GeminiConfig, GeminiLlmGateway},
    session::GeminiSession,
};
