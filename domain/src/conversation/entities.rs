//! Conversation entities

use serde::Serialize;

/// Fixed reply used when the model answers with no text.
pub const NO_REPLY_MESSAGE: &str = "Sorry, no reply available.";

/// Prefix of the reply synthesized when the remote call fails.
pub const ERROR_PREFIX: &str = "An error occurred:";

/// Speaker of a turn.
///
/// Serialized with the wire names the Gemini API expects (`user`/`model`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a turn carries a real message or a synthesized fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnKind {
    #[default]
    Message,
    /// Produced locally when the model gave no text or the call failed
    Fallback,
}

/// A single conversational entry (Entity)
///
/// Turns are immutable: there are no setters, and the transcript only ever
/// appends new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    role: Role,
    parts: Vec<String>,
    kind: TurnKind,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![content.into()],
            kind: TurnKind::Message,
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![content.into()],
            kind: TurnKind::Message,
        }
    }

    /// Model turn standing in for an empty reply.
    pub fn no_reply() -> Self {
        Self {
            role: Role::Model,
            parts: vec![NO_REPLY_MESSAGE.to_string()],
            kind: TurnKind::Fallback,
        }
    }

    /// Model turn describing a failed remote call.
    pub fn failure(description: impl std::fmt::Display) -> Self {
        Self {
            role: Role::Model,
            parts: vec![format!("{} {}", ERROR_PREFIX, description)],
            kind: TurnKind::Fallback,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn kind(&self) -> TurnKind {
        self.kind
    }

    pub fn is_fallback(&self) -> bool {
        self.kind == TurnKind::Fallback
    }

    /// Text segments in order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// All segments joined into one string.
    pub fn content(&self) -> String {
        self.parts.concat()
    }
}
