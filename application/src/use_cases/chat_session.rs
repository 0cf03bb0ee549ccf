//! Chat session use case
//!
//! Owns one conversation: the seeded [`Transcript`] and the model client
//! handle. Every submission appends exactly two turns, the user's message and
//! the model's reply (or a fallback turn when the call yields nothing or
//! fails). Remote failures never escape [`ChatSession::submit`].

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crate::ports::progress::{ChatProgressNotifier, NoProgress};
use recipe_domain::util::preview;
use recipe_domain::{DomainError, GenerationSettings, Model, SessionState, Transcript, Turn};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while starting a session
#[derive(Error, Debug)]
pub enum StartSessionError {
    #[error("Invalid generation settings: {0}")]
    InvalidSettings(#[from] DomainError),

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// One interactive conversation with the recipe bot.
///
/// `submit` takes `&mut self`, so a session has exactly one submitter at a
/// time.
pub struct ChatSession {
    handle: Box<dyn LlmSession>,
    transcript: Transcript,
    state: SessionState,
    streaming: bool,
}

impl ChatSession {
    /// Seed a transcript and open a model client handle for it.
    pub async fn start(
        gateway: &dyn LlmGateway,
        settings: GenerationSettings,
    ) -> Result<Self, StartSessionError> {
        settings.validate()?;

        let transcript = Transcript::seeded();
        let handle = gateway
            .create_session(&settings, transcript.turns())
            .await?;

        info!(
            model = %handle.model(),
            temperature = settings.temperature,
            max_output_tokens = settings.max_output_tokens,
            "Chat session ready"
        );

        Ok(Self {
            handle,
            transcript,
            state: SessionState::Ready,
            streaming: false,
        })
    }

    /// Request replies as a stream of chunks
    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn model(&self) -> &Model {
        self.handle.model()
    }

    /// Submit user text with default (no-op) progress
    pub async fn submit(&mut self, text: &str) -> Turn {
        self.submit_with_progress(text, &NoProgress).await
    }

    /// Submit user text, reporting the request to `progress`.
    ///
    /// `text` is expected to be non-empty; the caller filters blank input.
    pub async fn submit_with_progress(
        &mut self,
        text: &str,
        progress: &dyn ChatProgressNotifier,
    ) -> Turn {
        debug!("Submitting: {}", preview(text, 80));
        self.transcript.append(Turn::user(text));

        self.state = SessionState::AwaitingResponse;
        debug!(state = %self.state, model = %self.handle.model(), "Request sent");
        progress.on_request_start(self.handle.model());

        let reply = match self.request(text, progress).await {
            Ok(reply) if !reply.trim().is_empty() => {
                debug!(chars = reply.chars().count(), "Reply received");
                Turn::model(reply)
            }
            Ok(_) => {
                warn!("Model returned an empty reply");
                Turn::no_reply()
            }
            Err(e) => {
                warn!("Model request failed: {}", e);
                Turn::failure(&e)
            }
        };

        self.transcript.append(reply.clone());
        self.state = SessionState::Ready;
        debug!(state = %self.state, turns = self.transcript.len(), "Turn recorded");
        progress.on_request_complete(&reply);

        reply
    }

    async fn request(
        &self,
        text: &str,
        progress: &dyn ChatProgressNotifier,
    ) -> Result<String, GatewayError> {
        if self.streaming {
            self.handle
                .send_streaming(text)
                .await?
                .collect_text_with(|chunk| progress.on_reply_chunk(chunk))
                .await
        } else {
            self.handle.send(text).await
        }
    }
}
