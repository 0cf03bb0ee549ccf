//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for the recipe bot.

mod repl;

pub use repl::ChatRepl;
