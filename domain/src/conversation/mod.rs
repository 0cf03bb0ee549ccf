//! Conversation domain.
//!
//! - [`entities::Turn`]: a single message, tagged by [`entities::Role`]
//! - [`transcript::Transcript`]: the append-only history of one session
//! - [`seed`]: the chef persona pair every transcript starts with

pub mod entities;
pub mod seed;
pub mod transcript;
