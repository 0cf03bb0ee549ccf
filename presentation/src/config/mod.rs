//! Presentation-level configuration
//!
//! REPL behavior, already resolved from the config file and CLI flags.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while waiting for a reply
    pub show_progress: bool,
    /// Print reply chunks as they arrive
    pub stream: bool,
    /// Where line history is loaded from and saved to
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            stream: true,
            history_file: None,
        }
    }
}
