//! Progress notification port
//!
//! Defines the interface for reporting a chat request while it is in flight.

use recipe_domain::{Model, Turn};

/// Callback for progress updates during a chat submission
///
/// Implementations live in the presentation layer (spinner, streamed output).
pub trait ChatProgressNotifier: Send + Sync {
    /// Called right before the remote call starts
    fn on_request_start(&self, model: &Model);

    /// Called for each text chunk of a streamed reply
    fn on_reply_chunk(&self, _chunk: &str) {}

    /// Called once the reply (or fallback) turn has been appended
    fn on_request_complete(&self, turn: &Turn);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ChatProgressNotifier for NoProgress {
    fn on_request_start(&self, _model: &Model) {}
    fn on_request_complete(&self, _turn: &Turn) {}
}
