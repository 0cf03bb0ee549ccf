//! Gemini REST adapter
//!
//! Implements LlmGateway for the Google Generative Language API.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
pub mod sse;
pub mod transport;
