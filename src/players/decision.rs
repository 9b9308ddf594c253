use crate::gameplay::*;
use crate::*;

/// A targeting decision: investigate, kill, or guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub target: Position,
    pub reason: String,
}

/// A day-phase vote with its stated reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub ballot: Ballot,
    pub reason: String,
}

/// How a player died. Shapes the final-words prompt only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Mafia,
    Vote,
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mafia => write!(f, "killed by the mafia during the night"),
            Self::Vote => write!(f, "voted out by the town"),
        }
    }
}
