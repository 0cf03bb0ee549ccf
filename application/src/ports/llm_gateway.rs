//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted model.

use async_trait::async_trait;
use recipe_domain::{GenerationSettings, Model, StreamEvent, Turn};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer obtains a model client handle.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a session configured with `settings` whose running context
    /// starts from `history`.
    async fn create_session(
        &self,
        settings: &GenerationSettings,
        history: &[Turn],
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// Handle for receiving streaming events from an LLM session.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect all text into a single string, calling
    /// `on_delta` for each chunk as it arrives.
    pub async fn collect_text_with(
        mut self,
        mut on_delta: impl FnMut(&str) + Send,
    ) -> Result<String, GatewayError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    on_delta(&chunk);
                    full_text.push_str(&chunk);
                }
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::RequestFailed(e));
                }
            }
        }
        // Channel closed without Completed
        Ok(full_text)
    }
}

/// An active LLM session (the model client handle)
///
/// A session is reused for every turn of a conversation so the remote side
/// sees the accumulated context.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get the reply text (possibly empty)
    async fn send(&self, content: &str) -> Result<String, GatewayError>;

    /// Send a message and get a streaming reply.
    ///
    /// Default implementation calls `send()` and wraps the result in a single
    /// `Completed` event.
    async fn send_streaming(&self, content: &str) -> Result<StreamHandle, GatewayError> {
        let result = self.send(content).await?;
        let (tx, rx) = mpsc::channel(1);
        // Receiver may already be gone
        let _ = tx.send(StreamEvent::Completed(result)).await;
        Ok(StreamHandle::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collect_text_concatenates_deltas() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(StreamEvent::Delta("Chop ".to_string())).await.unwrap();
        tx.send(StreamEvent::Delta("onions".to_string())).await.unwrap();
        tx.send(StreamEvent::Completed(String::new())).await.unwrap();
        drop(tx);

        let mut seen = Vec::new();
        let text = StreamHandle::new(rx)
            .collect_text_with(|chunk| seen.push(chunk.to_string()))
            .await
            .unwrap();

        assert_eq!(text, "Chop onions");
        assert_eq!(seen, vec!["Chop ", "onions"]);
    }

    #[tokio::test]
    async fn collect_text_uses_completed_when_no_deltas() {
        let (tx, rx) = mpsc::channel(1);
        tx.send(StreamEvent::Completed("Whole reply".to_string()))
            .await
            .unwrap();

        let text = StreamHandle::new(rx).collect_text_with(|_| {}).await.unwrap();
        assert_eq!(text, "Whole reply");
    }

    #[tokio::test]
    async fn collect_text_surfaces_stream_error() {
        let (tx, rx) = mpsc::channel(2);
        tx.send(StreamEvent::Delta("partial".to_string())).await.unwrap();
        tx.send(StreamEvent::Error("connection reset".to_string()))
            .await
            .unwrap();

        let err = StreamHandle::new(rx)
            .collect_text_with(|_| {})
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::RequestFailed(msg) if msg == "connection reset"));
    }
}
