use super::*;
use crate::Position;
use serde::Serialize;
use serde::Serializer;

/// A day-phase vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ballot {
    /// "No one": do not eliminate anybody this round.
    Abstain,
    Target(Position),
}

impl Ballot {
    pub fn target(&self) -> Option<Position> {
        match self {
            Self::Target(p) => Some(*p),
            Self::Abstain => None,
        }
    }
}

impl From<Position> for Ballot {
    fn from(pos: Position) -> Self {
        Self::Target(pos)
    }
}

impl std::fmt::Display for Ballot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abstain => write!(f, "no one"),
            Self::Target(p) => write!(f, "{}", Name(*p)),
        }
    }
}

impl Serialize for Ballot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
