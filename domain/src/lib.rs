//! Domain layer for recipe-chat
//!
//! This crate contains the conversation entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Turn**: one message, spoken by either the user or the model
//! - **Transcript**: the append-only history of Turns for one session,
//!   always starting with the chef persona seed pair
//! - **GenerationSettings**: the fixed parameters every remote call uses

pub mod conversation;
pub mod core;
pub mod generation;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    entities::{ERROR_PREFIX, NO_REPLY_MESSAGE, Role, Turn, TurnKind},
    seed::{SEED_ACKNOWLEDGEMENT, SEED_INSTRUCTION, seed_pair},
    transcript::Transcript,
};
pub use core::{error::DomainError, model::Model};
pub use generation::GenerationSettings;
pub use session::{state::SessionState, stream::StreamEvent};
