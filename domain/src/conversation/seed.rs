//! Persona seed pair.
//!
//! The hosted API has no separate system role in this flow, so the persona is
//! injected as an ordinary user turn followed by the model's acknowledgement.

use super::entities::Turn;

pub const SEED_INSTRUCTION: &str = "You are an expert chef. Give all kinds of cooking recipes. \
Answer briefly and clearly. Refuse questions that are not related to cooking.";

pub const SEED_ACKNOWLEDGEMENT: &str =
    "Of course! Ask me for any recipe you'd like. I'm ready to help!";

/// The two turns every transcript starts with.
pub fn seed_pair() -> [Turn; 2] {
    [Turn::user(SEED_INSTRUCTION), Turn::model(SEED_ACKNOWLEDGEMENT)]
}
