//! External language-model collaborators.
//!
//! The game never depends on what an oracle says being well formed; the
//! agent layer parses and repairs every answer. Oracles only turn a system
//! prompt and a user prompt into text, and may fail.
//!
//! - [`Oracle`] - The collaborator trait
//! - [`Backend`] - Supported collaborators, selected by name
//! - [`Chat`] - OpenAI-compatible chat-completions client
//! - [`Fish`] - Seeded random responder for offline games and tests
//! - [`Human`] - Interactive responder over the terminal (requires `cli` feature)
//! - [`Meter`] - Token counting before and after each call
mod backend;
mod chat;
mod fish;
#[cfg(feature = "cli")]
mod human;
mod message;
mod meter;
mod oracle;
mod settings;

pub use backend::*;
pub use chat::*;
pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use message::*;
pub use meter::*;
pub use oracle::*;
pub use settings::*;
