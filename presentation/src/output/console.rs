//! Console output formatter for chat turns

use colored::Colorize;
use recipe_domain::{Model, Role, Transcript, Turn};

/// Formats turns and transcripts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Speaker label shown before a turn
    pub fn speaker(role: Role) -> String {
        match role {
            Role::User => "You".cyan().bold().to_string(),
            Role::Model => "Chef".yellow().bold().to_string(),
        }
    }

    /// Format a single turn. Fallback turns are shown in red.
    pub fn format_turn(turn: &Turn) -> String {
        let content = turn.content();
        let body = if turn.is_fallback() {
            content.red().to_string()
        } else {
            content
        };
        format!("{} {}", Self::speaker(turn.role()), body)
    }

    /// Format the whole transcript, seed pair included
    pub fn format_transcript(transcript: &Transcript) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Conversation"));
        for turn in transcript {
            output.push('\n');
            output.push_str(&Self::format_turn(turn));
            output.push('\n');
        }
        output.push_str(&Self::footer());

        output
    }

    pub fn welcome(model: &Model) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│              Recipe Chat (chef)             │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
        output.push_str("Ask for any recipe. Type /help for commands.\n");

        output
    }

    pub fn help() -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("Commands:\n");
        output.push_str("  /help, /h, /?     - Show this help\n");
        output.push_str("  /history          - Show the full conversation, persona seed included\n");
        output.push_str("  /quit, /exit, /q  - Exit chat\n");
        output.push_str("\nCtrl-C clears the current line, Ctrl-D exits.\n");

        output
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).cyan().bold())
    }

    fn footer() -> String {
        format!("{}\n", "─".repeat(40).dimmed())
    }
}
