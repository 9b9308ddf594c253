//! Hidden roles and their assignment.
//!
//! - [`Role`] - One of civilian, detective, mafia, don
//! - [`Capability`] - What a role is allowed to be asked to do
//! - [`Assignment`] - The shuffled fixed role multiset for one game
mod assignment;
mod capability;
mod role;

pub use assignment::*;
pub use capability::*;
pub use role::*;
