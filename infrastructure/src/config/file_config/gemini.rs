//! Gemini connection configuration from TOML (`[gemini]` section)

use crate::gemini::gateway::GeminiConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var or a secrets file).
    pub api_key: Option<String>,
    /// Base URL of the Generative Language API.
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: GeminiConfig::DEFAULT_BASE_URL.to_string(),
        }
    }
}
