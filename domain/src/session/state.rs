//! Session state machine

/// Request-cycle state of a chat session.
///
/// A session that has not been constructed yet is the uninitialized state;
/// construction moves it straight to `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Accepting the next submission
    #[default]
    Ready,
    /// A remote call is in flight
    AwaitingResponse,
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Ready => "ready",
            SessionState::AwaitingResponse => "awaiting_response",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
