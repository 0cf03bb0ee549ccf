//! Configuration file loading for recipe-chat
//!
//! This module handles file I/O, merging of configuration from multiple sources
//! and API key resolution. The priority order (highest to lowest):
//!
//! 1. `RECIPE_CHAT_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./recipe-chat.toml` or `./.recipe-chat.toml`
//! 4. Global: `<config_dir>/recipe-chat/config.toml`
//! 5. Default values

mod credentials;
mod error;
mod file_config;
mod loader;

pub use credentials::{ApiKey, CredentialResolver};
pub use error::ConfigError;
pub use file_config::{ConfigValidationError, FileConfig, FileGeminiConfig, FileReplConfig};
pub use loader::ConfigLoader;
