//! Gemini chat session.
//!
//! The REST API is stateless, so [`GeminiSession`] keeps the running context
//! itself and sends it in full with every request. Only completed exchanges
//! with a non-empty reply are kept; a failed or empty call leaves the context
//! as it was.

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{Content, GenerateContentResponse};
use crate::gemini::sse::{SseEvent, SseReader};
use crate::gemini::transport::GeminiTransport;
use async_trait::async_trait;
use futures::StreamExt;
use recipe_application::{GatewayError, LlmSession, StreamHandle};
use recipe_domain::{GenerationSettings, Model, StreamEvent};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

const STREAM_BUFFER: usize = 32;

pub struct GeminiSession {
    transport: GeminiTransport,
    settings: GenerationSettings,
    /// Running context sent with each request
    contents: Arc<Mutex<Vec<Content>>>,
}

impl GeminiSession {
    pub fn new(
        transport: GeminiTransport,
        settings: GenerationSettings,
        history: Vec<Content>,
    ) -> Self {
        Self {
            transport,
            settings,
            contents: Arc::new(Mutex::new(history)),
        }
    }

    /// Number of entries in the running context.
    pub async fn context_len(&self) -> usize {
        self.contents.lock().await.len()
    }
}

/// Keep the pending user entry only if the model answered with text.
fn settle(contents: &mut Vec<Content>, reply: &str) {
    if reply.trim().is_empty() {
        contents.pop();
    } else {
        contents.push(Content::model(reply));
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.settings.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        let mut contents = self.contents.lock().await;
        contents.push(Content::user(content));

        let response = match self.transport.generate(&self.settings, &contents).await {
            Ok(response) => response,
            Err(e) => {
                contents.pop();
                return Err(e.into());
            }
        };

        if let Some(reason) = response.block_reason() {
            warn!("Prompt blocked: {}", reason);
        }

        let reply = response.text();
        settle(&mut contents, &reply);
        debug!(context = contents.len(), "Gemini reply received");

        Ok(reply)
    }

    async fn send_streaming(&self, content: &str) -> std::result::Result<StreamHandle, GatewayError> {
        // Held until the stream ends so the next request sees this exchange
        let mut contents = Arc::clone(&self.contents).lock_owned().await;
        contents.push(Content::user(content));

        let response = match self.transport.stream(&self.settings, &contents).await {
            Ok(response) => response,
            Err(e) => {
                contents.pop();
                return Err(e.into());
            }
        };

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);

        tokio::spawn(async move {
            match pump_stream(response, &tx).await {
                Ok(reply) => {
                    settle(&mut contents, &reply);
                    // Receiver may already be gone
                    let _ = tx.send(StreamEvent::Completed(reply)).await;
                }
                Err(e) => {
                    contents.pop();
                    let error: GatewayError = e.into();
                    let _ = tx.send(StreamEvent::Error(error.to_string())).await;
                }
            }
        });

        Ok(StreamHandle::new(rx))
    }
}

/// Read SSE chunks, forwarding each text delta. Returns the full reply.
async fn pump_stream(response: reqwest::Response, tx: &mpsc::Sender<StreamEvent>) -> Result<String> {
    let body = response
        .bytes_stream()
        .map(|chunk| chunk.map_err(std::io::Error::other));
    let mut events = SseReader::new(body);
    let mut reply = String::new();

    while let Some(event) = events.next_event().await? {
        forward(event, tx, &mut reply).await?;
    }

    Ok(reply)
}

async fn forward(
    event: SseEvent,
    tx: &mpsc::Sender<StreamEvent>,
    reply: &mut String,
) -> Result<()> {
    let chunk: GenerateContentResponse =
        serde_json::from_str(&event.data).map_err(|e| GeminiError::ParseError {
            error: e.to_string(),
            raw: event.data.clone(),
        })?;

    if let Some(error) = chunk.error {
        return Err(error.into());
    }

    let text = chunk.text();
    if !text.is_empty() {
        reply.push_str(&text);
        let _ = tx.send(StreamEvent::Delta(text)).await;
    }
    Ok(())
}
