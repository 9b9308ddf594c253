//! Agent decision interface.
//!
//! An [`Agent`] wraps one oracle with the player's identity, role, faction
//! knowledge, and private memory. Every decision goes through the same
//! steps: build prompts, ask the oracle, parse the answer, and repair it
//! with the fallback policy if needed. Nothing here ever fails the caller.
//!
//! - [`Agent`] - One seat's decision maker
//! - [`Memory`] - Private history fed back into prompts
//! - [`Protocol`] - Parsing of `player_#` answers
//! - [`Choice`], [`Vote`], [`Cause`] - Structured decisions
mod agent;
mod decision;
mod memory;
mod prompt;
mod protocol;

pub use agent::*;
pub use decision::*;
pub use memory::*;
pub use protocol::*;
