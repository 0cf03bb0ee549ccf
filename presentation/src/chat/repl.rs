//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use recipe_application::ChatSession;
use recipe_domain::Turn;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::{debug, warn};

/// Slash commands understood by the REPL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Help,
    History,
    Quit,
    Unknown,
}

impl Command {
    fn parse(input: &str) -> Self {
        match input.split_whitespace().next().unwrap_or_default() {
            "/quit" | "/exit" | "/q" => Command::Quit,
            "/help" | "/h" | "/?" => Command::Help,
            "/history" => Command::History,
            _ => Command::Unknown,
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            config: ReplConfig::default(),
        }
    }

    /// Apply REPL settings; `stream` switches the session to streamed replies.
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.session = self.session.with_streaming(config.stream);
        self.config = config;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_file.clone();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            // Missing on first run
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    println!();
                    self.ask(line).await;
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    /// Submit one message and print the reply.
    ///
    /// Streamed replies are printed chunk by chunk; otherwise the finished
    /// turn is printed once.
    pub async fn ask(&mut self, text: &str) -> Turn {
        let reporter = if self.config.show_progress {
            ProgressReporter::new()
        } else {
            ProgressReporter::without_spinner()
        };

        let turn = self.session.submit_with_progress(text, &reporter).await;

        if !reporter.streamed() {
            println!("{}", ConsoleFormatter::format_turn(&turn));
        }
        debug!(turns = self.session.transcript().len(), "Turn complete");

        turn
    }

    fn print_welcome(&self) {
        println!("{}", self.welcome_screen());
    }

    /// Banner plus the seed greeting. The persona instruction before it is
    /// not shown here; `/history` prints the full seeded history.
    fn welcome_screen(&self) -> String {
        let mut output = ConsoleFormatter::welcome(self.session.model());
        if let Some(greeting) = self.session.transcript().last() {
            output.push_str(&ConsoleFormatter::format_turn(greeting));
            output.push('\n');
        }
        output
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match Command::parse(cmd) {
            Command::Quit => {
                println!("Bye!");
                true
            }
            Command::Help => {
                println!("{}", ConsoleFormatter::help());
                false
            }
            Command::History => {
                println!("{}", ConsoleFormatter::format_transcript(self.session.transcript()));
                false
            }
            Command::Unknown => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use recipe_application::{GatewayError, LlmGateway, LlmSession};
    use recipe_domain::{
        GenerationSettings, Model, NO_REPLY_MESSAGE, Role, SEED_ACKNOWLEDGEMENT,
        SEED_INSTRUCTION,
    };

    struct EchoSession {
        model: Model,
    }

    #[async_trait]
    impl LlmSession for EchoSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            match content {
                "silence" => Ok(String::new()),
                "offline" => Err(GatewayError::Timeout),
                other => Ok(format!("Recipe for {}", other)),
            }
        }
    }

    struct EchoGateway;

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn create_session(
            &self,
            settings: &GenerationSettings,
            _history: &[Turn],
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Ok(Box::new(EchoSession {
                model: settings.model.clone(),
            }))
        }
    }

    async fn repl() -> ChatRepl {
        let session = ChatSession::start(&EchoGateway, GenerationSettings::default())
            .await
            .unwrap();
        ChatRepl::new(session).with_config(ReplConfig {
            show_progress: false,
            stream: false,
            history_file: None,
        })
    }

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse("/exit"), Command::Quit);
        assert_eq!(Command::parse("/q"), Command::Quit);
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/?"), Command::Help);
        assert_eq!(Command::parse("/history  "), Command::History);
        assert_eq!(Command::parse("/models"), Command::Unknown);
    }

    #[tokio::test]
    async fn only_quit_ends_the_loop() {
        let repl = repl().await;
        assert!(repl.handle_command("/quit"));
        assert!(!repl.handle_command("/help"));
        assert!(!repl.handle_command("/history"));
        assert!(!repl.handle_command("/nope"));
    }

    #[tokio::test]
    async fn welcome_shows_greeting_and_history_shows_seed() {
        let repl = repl().await;

        let welcome = repl.welcome_screen();
        assert!(welcome.contains(SEED_ACKNOWLEDGEMENT));
        assert!(!welcome.contains(SEED_INSTRUCTION));

        let history = ConsoleFormatter::format_transcript(repl.session().transcript());
        assert!(history.contains(SEED_INSTRUCTION));
        assert!(history.contains(SEED_ACKNOWLEDGEMENT));
    }

    #[tokio::test]
    async fn ask_appends_exchange() {
        let mut repl = repl().await;

        let turn = repl.ask("soup").await;

        assert_eq!(turn.role(), Role::Model);
        assert_eq!(turn.content(), "Recipe for soup");
        assert_eq!(repl.session().transcript().len(), 4);
    }

    #[tokio::test]
    async fn ask_survives_empty_and_failed_replies() {
        let mut repl = repl().await;

        let empty = repl.ask("silence").await;
        assert_eq!(empty.content(), NO_REPLY_MESSAGE);

        let failed = repl.ask("offline").await;
        assert!(failed.is_fallback());
        assert!(failed.content().contains("Request timed out"));

        assert_eq!(repl.session().transcript().len(), 6);
    }
}
