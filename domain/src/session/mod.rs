//! Chat session domain.
//!
//! - [`state::SessionState`]: where a session is in its request cycle
//! - [`stream::StreamEvent`]: events of a streamed model reply

pub mod state;
pub mod stream;
