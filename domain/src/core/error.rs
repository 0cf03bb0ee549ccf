//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Temperature must be within 0.0..=2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("max_output_tokens cannot be 0")]
    InvalidMaxOutputTokens,

    #[error("Request timeout cannot be 0")]
    InvalidTimeout,
}
