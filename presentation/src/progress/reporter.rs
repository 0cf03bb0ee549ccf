//! Progress reporting for chat requests

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use recipe_application::ChatProgressNotifier;
use recipe_domain::{Model, Role, Turn};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shows a spinner while the request is in flight and prints streamed reply
/// chunks as they arrive.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
    streamed: AtomicBool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_spinner: true,
            streamed: AtomicBool::new(false),
        }
    }

    /// Print streamed chunks without showing a spinner
    pub fn without_spinner() -> Self {
        Self {
            show_spinner: false,
            ..Self::new()
        }
    }

    /// Whether any reply text was already printed during the last request
    pub fn streamed(&self) -> bool {
        self.streamed.load(Ordering::SeqCst)
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatProgressNotifier for ProgressReporter {
    fn on_request_start(&self, model: &Model) {
        self.streamed.store(false, Ordering::SeqCst);
        if !self.show_spinner {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Looking for a recipe ({})...", model));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_reply_chunk(&self, chunk: &str) {
        self.clear_spinner();

        let mut stdout = io::stdout().lock();
        if !self.streamed.swap(true, Ordering::SeqCst) {
            let _ = write!(stdout, "{} ", ConsoleFormatter::speaker(Role::Model));
        }
        let _ = write!(stdout, "{}", chunk);
        let _ = stdout.flush();
    }

    fn on_request_complete(&self, turn: &Turn) {
        self.clear_spinner();

        if self.streamed() {
            println!();
            // A stream that broke midway still ends in a fallback turn
            if turn.is_fallback() {
                println!("{}", ConsoleFormatter::format_turn(turn));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streamed_flag_tracks_chunks() {
        let reporter = ProgressReporter::without_spinner();
        let model = Model::default();

        reporter.on_request_start(&model);
        assert!(!reporter.streamed());

        reporter.on_reply_chunk("Knead ");
        reporter.on_reply_chunk("the dough.");
        assert!(reporter.streamed());

        reporter.on_request_complete(&Turn::model("Knead the dough."));
        assert!(reporter.streamed());

        // Reset for the next request
        reporter.on_request_start(&model);
        assert!(!reporter.streamed());
    }

    #[test]
    fn spinner_is_cleared_on_completion() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start(&Model::default());
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_request_complete(&Turn::no_reply());
        assert!(reporter.spinner.lock().unwrap().is_none());
        assert!(!reporter.streamed());
    }
}
