use super::*;
use crate::gameplay::*;
use crate::gameroom::Status;
use crate::roles::Role;
use serde::Serialize;
use std::collections::BTreeMap;

/// One seat as it ended the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub player_name: Name,
    pub role: Role,
    pub llm_name: String,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct Details {
    pub players: Vec<Entry>,
    pub mafia_players: Vec<Name>,
    pub detective_player: Name,
    pub don_guesses: Vec<DonGuess>,
    pub game_log: Vec<Record>,
    pub game_outcome: Option<Verdict>,
}

/// The exported game: roster, log, outcome, and what it cost.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub game_details: Details,
    pub token_details: BTreeMap<String, TokenDetail>,
    pub token_prices: Prices,
}

impl Report {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    pub fn save<P>(&self, path: P) -> anyhow::Result<()>
    where
        P: AsRef<std::path::Path>,
    {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("[report] saved to {}", path.as_ref().display());
        Ok(())
    }
}
