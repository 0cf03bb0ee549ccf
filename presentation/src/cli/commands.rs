//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for recipe-chat
#[derive(Parser, Debug)]
#[command(name = "recipe-chat")]
#[command(author, version, about = "Chat with a chef about recipes, powered by Gemini")]
#[command(long_about = r#"
Recipe Chat is a terminal chatbot that answers cooking questions in the voice
of a friendly chef.

Without a question it starts an interactive session. With a question it asks
once, prints the reply and exits.

The API key is read from $GEMINI_API_KEY (or the variable named by
gemini.api_key_env), then gemini.api_key, then GEMINI_API_KEY in secrets.toml.

Configuration files are loaded from (in priority order):
1. RECIPE_CHAT_<SECTION>__<KEY>               Environment
2. --config <path>                            Explicit config file
3. ./recipe-chat.toml                         Project-level config
4. ~/.config/recipe-chat/config.toml          Global config

Example:
  recipe-chat
  recipe-chat "How do I make a quick tomato soup?"
"#)]
pub struct Cli {
    /// Ask a single question and exit
    pub question: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Wait for the complete reply instead of streaming it
    #[arg(long)]
    pub no_stream: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
