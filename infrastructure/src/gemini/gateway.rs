//! Gemini LLM Gateway implementation

use crate::config::ApiKey;
use crate::gemini::error::Result;
use crate::gemini::protocol::Content;
use crate::gemini::session::GeminiSession;
use crate::gemini::transport::GeminiTransport;
use async_trait::async_trait;
use recipe_application::{GatewayError, LlmGateway, LlmSession};
use recipe_domain::{GenerationSettings, Turn};
use tracing::info;

/// Connection settings for the Generative Language API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: ApiKey,
    pub base_url: String,
}

impl GeminiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// LLM Gateway implementation for Google Gemini
pub struct GeminiLlmGateway {
    transport: GeminiTransport,
}

impl GeminiLlmGateway {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let transport = GeminiTransport::new(config.base_url, config.api_key)?;

        info!("GeminiLlmGateway initialized");

        Ok(Self { transport })
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(
        &self,
        settings: &GenerationSettings,
        history: &[Turn],
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        let history = history.iter().map(Content::from).collect();
        Ok(Box::new(GeminiSession::new(
            self.transport.clone(),
            settings.clone(),
            history,
        )))
    }
}
