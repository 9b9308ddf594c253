//! The phase engine.
//!
//! A [`Lobby`] turns model names into a seated [`Game`]. The game owns
//! every seat, the role assignment, the transcript, the log, and the one
//! random source, and alternates nights and days until a side wins.
mod game;
mod lobby;
mod seat;

pub use game::*;
pub use lobby::*;
pub use seat::*;
