//! Pure rules of the game, free of agents and I/O.
//!
//! - [`Name`] - Display and wire form of a position (`player_3`)
//! - [`Ballot`] - A day vote: a named target or "no one"
//! - [`Tally`] - Day vote count with the tie and abstention rules
//! - [`Conspiracy`] - Night kill votes, don override, plurality fallback
//! - [`Outcome`] - Win condition over alive role counts
//! - [`Rotation`] - Turn order starting from a random alive player
mod ballot;
mod conspiracy;
mod name;
mod outcome;
mod rotation;
mod tally;

pub use ballot::*;
pub use conspiracy::*;
pub use name::*;
pub use outcome::*;
pub use rotation::*;
pub use tally::*;
