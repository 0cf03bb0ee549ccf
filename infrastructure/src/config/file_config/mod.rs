//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Generation parameters (model, temperature, token limit, timeout) are fixed
//! and deliberately absent here.

mod gemini;
mod repl;

pub use gemini::FileGeminiConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("gemini.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API connection settings
    pub gemini: FileGeminiConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gemini.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.gemini.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "MY_GEMINI_KEY"
base_url = "http://localhost:8080/v1beta"

[repl]
show_progress = false
stream = false
history_file = "~/.local/share/recipe-chat/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.api_key, None);
        assert_eq!(config.gemini.base_url, "http://localhost:8080/v1beta");
        assert!(!config.repl.show_progress);
        assert!(!config.repl.stream);
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[repl]
stream = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.repl.stream);
        // Defaults should apply
        assert!(config.repl.show_progress);
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_base_url() {
        let toml_str = r#"
[gemini]
base_url = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }

    #[test]
    fn test_validate_empty_api_key_env() {
        let mut config = FileConfig::default();
        config.gemini.api_key_env = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyApiKeyEnv));
    }
}
