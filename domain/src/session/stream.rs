//! Streaming events for model replies.

/// An event in a streaming model reply.
///
/// Bridges the adapter's SSE chunks to the application layer so the UI can
/// print the reply while it is still being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk from the model.
    Delta(String),
    /// The complete reply text (signals stream end).
    Completed(String),
    /// An error that occurred mid-stream.
    Error(String),
}
