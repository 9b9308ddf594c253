use super::*;
use serde::Serialize;

/// A player's hidden role. Exactly one per player, fixed for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Civilian,
    Detective,
    Mafia,
    Don,
}

impl Role {
    /// Capability table. The engine consults this before every
    /// role-specific request.
    pub fn capabilities(&self) -> &'static [Capability] {
        use Capability::*;
        match self {
            Self::Civilian => &[Speak, Vote, FinalWords],
            Self::Detective => &[Speak, Vote, FinalWords, Investigate],
            Self::Mafia => &[Speak, Vote, FinalWords, Kill],
            Self::Don => &[Speak, Vote, FinalWords, Decide, Guess],
        }
    }
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
    /// True for the whole mafia faction, don included.
    pub fn is_mafia(&self) -> bool {
        matches!(self, Self::Mafia | Self::Don)
    }
    pub fn is_good(&self) -> bool {
        !self.is_mafia()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Civilian => write!(f, "civilian"),
            Self::Detective => write!(f, "detective"),
            Self::Mafia => write!(f, "mafia"),
            Self::Don => write!(f, "don"),
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "civilian" => Ok(Self::Civilian),
            "detective" => Ok(Self::Detective),
            "mafia" => Ok(Self::Mafia),
            "don" => Ok(Self::Don),
            other => Err(anyhow::anyhow!("unknown role: {}", other)),
        }
    }
}
