//! CLI entrypoint for Recipe Chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use recipe_application::ChatSession;
use recipe_domain::GenerationSettings;
use recipe_infrastructure::{
    ConfigLoader, CredentialResolver, FileConfig, GeminiConfig, GeminiLlmGateway,
};
use recipe_presentation::{ChatRepl, Cli, ReplConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting Recipe Chat");

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    let api_key = CredentialResolver::new(&config.gemini).resolve()?;

    // === Dependency Injection ===
    let gateway = GeminiLlmGateway::new(
        GeminiConfig::new(api_key).with_base_url(config.gemini.base_url.clone()),
    )
    .context("Failed to create Gemini client")?;

    let session = ChatSession::start(&gateway, GenerationSettings::default())
        .await
        .context("Failed to start chat session")?;

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        stream: config.repl.stream && !cli.no_stream,
        history_file: config.repl.history_path(),
    };
    let mut repl = ChatRepl::new(session).with_config(repl_config);

    // One-shot mode
    if let Some(question) = cli.question.as_deref() {
        let question = question.trim();
        if !question.is_empty() {
            repl.ask(question).await;
        }
        return Ok(());
    }

    repl.run().await?;

    Ok(())
}
