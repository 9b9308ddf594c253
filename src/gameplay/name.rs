use crate::Position;
use serde::Serialize;
use serde::Serializer;

/// A seat rendered the way agents and reports see it: `player_<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(pub Position);

impl Name {
    pub fn position(&self) -> Position {
        self.0
    }
}

impl From<Position> for Name {
    fn from(pos: Position) -> Self {
        Self(pos)
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player_{}", self.0)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
