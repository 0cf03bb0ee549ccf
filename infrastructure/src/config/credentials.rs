//! API key resolution.
//!
//! Sources, first hit wins:
//! 1. the environment variable named by `gemini.api_key_env`
//! 2. `gemini.api_key` from the loaded config
//! 3. `GEMINI_API_KEY` in `./secrets.toml` or `<config_dir>/recipe-chat/secrets.toml`,
//!    either at top level or under a `[secrets]` table

use super::error::ConfigError;
use super::file_config::FileGeminiConfig;
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

const SECRET_KEY: &str = "GEMINI_API_KEY";

/// API key for the Generative Language API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
    secrets: Option<SecretsTable>,
}

#[derive(Debug, Default, Deserialize)]
struct SecretsTable {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

impl SecretsFile {
    fn into_key(self) -> Option<String> {
        non_blank(self.gemini_api_key)
            .or_else(|| self.secrets.and_then(|s| non_blank(s.gemini_api_key)))
    }
}

type EnvLookup<'a> = Box<dyn Fn(&str) -> Option<String> + 'a>;

/// Finds the API key across env, config and secrets files.
pub struct CredentialResolver<'a> {
    config: &'a FileGeminiConfig,
    secrets_paths: Vec<PathBuf>,
    env: EnvLookup<'a>,
}

impl<'a> CredentialResolver<'a> {
    pub fn new(config: &'a FileGeminiConfig) -> Self {
        Self {
            config,
            secrets_paths: Self::default_secrets_paths(),
            env: Box::new(|name| std::env::var(name).ok()),
        }
    }

    /// Replace the process environment with a custom lookup.
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String> + 'a) -> Self {
        self.env = Box::new(lookup);
        self
    }

    pub fn with_secrets_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.secrets_paths = paths;
        self
    }

    /// `./secrets.toml`, then `<config_dir>/recipe-chat/secrets.toml`.
    pub fn default_secrets_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("secrets.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("recipe-chat").join("secrets.toml"));
        }
        paths
    }

    pub fn resolve(&self) -> Result<ApiKey, ConfigError> {
        let env_name = self.config.api_key_env.as_str();

        if let Some(key) = non_blank((self.env)(env_name)) {
            debug!(source = env_name, "API key from environment");
            return Ok(ApiKey::new(key));
        }

        if let Some(key) = non_blank(self.config.api_key.clone()) {
            debug!("API key from config file");
            return Ok(ApiKey::new(key));
        }

        for path in self.secrets_paths.iter().filter(|p| p.exists()) {
            let secrets: SecretsFile = Figment::from(Toml::file(path))
                .extract()
                .map_err(|e| ConfigError::Secrets {
                    path: path.clone(),
                    source: Box::new(e),
                })?;
            if let Some(key) = secrets.into_key() {
                debug!(path = %path.display(), "API key from secrets file");
                return Ok(ApiKey::new(key));
            }
        }

        Err(ConfigError::MissingCredential {
            env: env_name.to_string(),
            key: SECRET_KEY,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn resolver(config: &FileGeminiConfig, paths: Vec<PathBuf>) -> CredentialResolver<'_> {
        CredentialResolver::new(config)
            .with_env_lookup(no_env)
            .with_secrets_paths(paths)
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("AIza-very-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "AIza-very-secret");
    }

    #[test]
    fn env_var_wins_over_config() {
        let config = FileGeminiConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        let key = resolver(&config, vec![])
            .with_env_lookup(|name| (name == "GEMINI_API_KEY").then(|| "from-env".to_string()))
            .resolve()
            .unwrap();
        assert_eq!(key.expose(), "from-env");
    }

    #[test]
    fn custom_env_name_is_used() {
        let config = FileGeminiConfig {
            api_key_env: "MY_KEY".to_string(),
            ..Default::default()
        };
        let key = resolver(&config, vec![])
            .with_env_lookup(|name| (name == "MY_KEY").then(|| "custom".to_string()))
            .resolve()
            .unwrap();
        assert_eq!(key.expose(), "custom");
    }

    #[test]
    fn blank_env_falls_through_to_config() {
        let config = FileGeminiConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        let key = resolver(&config, vec![])
            .with_env_lookup(|_| Some("   ".to_string()))
            .resolve()
            .unwrap();
        assert_eq!(key.expose(), "from-config");
    }

    #[test]
    fn top_level_secret_is_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "GEMINI_API_KEY = \"top-level\"\n").unwrap();

        let config = FileGeminiConfig::default();
        let key = resolver(&config, vec![path]).resolve().unwrap();
        assert_eq!(key.expose(), "top-level");
    }

    #[test]
    fn secrets_table_is_found_and_missing_files_skipped() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "[secrets]\nGEMINI_API_KEY = \"nested\"\n").unwrap();

        let config = FileGeminiConfig::default();
        let key = resolver(&config, vec![missing, path]).resolve().unwrap();
        assert_eq!(key.expose(), "nested");
    }

    #[test]
    fn malformed_secrets_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "GEMINI_API_KEY = ").unwrap();

        let config = FileGeminiConfig::default();
        let err = resolver(&config, vec![path]).resolve().unwrap_err();
        assert!(matches!(err, ConfigError::Secrets { .. }));
    }

    #[test]
    fn absence_is_missing_credential() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "OTHER = \"x\"\n").unwrap();

        let config = FileGeminiConfig::default();
        let err = resolver(&config, vec![path]).resolve().unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { ref env, .. } if env == "GEMINI_API_KEY"));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
