//! Error types for the Gemini adapter

use crate::gemini::protocol::ApiError;
use recipe_application::GatewayError;
use recipe_domain::util::preview;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Raw bodies are cut to this many characters in error messages
const RAW_PREVIEW_CHARS: usize = 200;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// An `error` object inside an otherwise successful response
    #[error("Gemini error {code} {status}: {message}")]
    Service {
        code: u16,
        status: String,
        message: String,
    },

    #[error("Stream read failed: {0}")]
    Stream(#[from] std::io::Error),

    #[error("Failed to parse response: {error}\nRaw response: {}", preview(.raw, RAW_PREVIEW_CHARS))]
    ParseError { error: String, raw: String },
}

impl From<ApiError> for GeminiError {
    fn from(e: ApiError) -> Self {
        GeminiError::Service {
            code: e.code,
            status: e.status,
            message: e.message,
        }
    }
}

impl GeminiError {
    /// True when the request (or the body it was streaming) hit the
    /// per-request timeout.
    fn is_timeout(&self) -> bool {
        match self {
            GeminiError::Http(inner) => inner.is_timeout(),
            GeminiError::Stream(inner) => inner
                .get_ref()
                .and_then(|source| source.downcast_ref::<reqwest::Error>())
                .is_some_and(reqwest::Error::is_timeout),
            _ => false,
        }
    }
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        if e.is_timeout() {
            return GatewayError::Timeout;
        }
        match e {
            GeminiError::Http(ref inner) if inner.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            GeminiError::ClientBuild(_) => GatewayError::SessionError(e.to_string()),
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}
