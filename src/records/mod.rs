//! What happened, in the shapes it gets exported in.
//!
//! - [`Transcript`] - Running public text every agent reads
//! - [`NightRecord`], [`DayRecord`] - Structured phase records
//! - [`Chronicle`] - Append-only game log plus the don-guess history
//! - [`Ledger`] - Token usage per model with the price table
//! - [`Report`] - The exported game
mod chronicle;
mod day;
mod ledger;
mod night;
mod price;
mod report;
mod transcript;

pub use chronicle::*;
pub use day::*;
pub use ledger::*;
pub use night::*;
pub use price::*;
pub use report::*;
pub use transcript::*;
