use crate::gameplay::*;
use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// The don's attempt to find the detective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonGuess {
    pub night: Epoch,
    pub don_id: Name,
    pub guessed_player: Name,
    pub is_detective: bool,
    /// Absent on the first night, when there is nothing to reason from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// What the detective learned about one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Investigation {
    pub investigated: Name,
    pub result: bool,
}

/// The detective's private reasoning for one night's investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectiveThinking {
    pub player_id: Name,
    pub investigated_player: Name,
    pub internal_reason: String,
}

/// A dead player's last words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalWords {
    pub player_id: Name,
    pub words: String,
}

/// Everything resolved during one night.
#[derive(Debug, Clone, Serialize)]
pub struct NightRecord {
    pub night: Epoch,
    pub mafia_kill: Option<Name>,
    /// Absent once the detective is found or the don is dead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub don_guess: Option<DonGuess>,
    /// Keyed by the detective; empty when the detective is dead.
    pub detective_investigation: BTreeMap<Name, Investigation>,
    pub mafia_reasons: Vec<KillVote>,
    /// Null when the detective is dead.
    pub detective_thinking: Option<DetectiveThinking>,
    /// Absent for a civilian killed on the first night.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_words: Option<FinalWords>,
}

impl NightRecord {
    pub fn new(night: Epoch) -> Self {
        Self {
            night,
            mafia_kill: None,
            don_guess: None,
            detective_investigation: BTreeMap::new(),
            mafia_reasons: Vec::new(),
            detective_thinking: None,
            final_words: None,
        }
    }
    pub fn investigation(&self) -> Option<&Investigation> {
        self.detective_investigation.values().next()
    }
}
