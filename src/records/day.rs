use super::*;
use crate::gameplay::*;
use crate::*;
use serde::Serialize;

/// One thing said or done in the open during a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Event {
    Statement {
        player_id: Name,
        statement: String,
    },
    Vote {
        player_id: Name,
        vote: Ballot,
        reason: String,
    },
}

/// Everything said and decided during one day.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub day: Epoch,
    pub events: Vec<Event>,
    pub elimination: Elimination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_words: Option<FinalWords>,
}

impl DayRecord {
    pub fn new(day: Epoch) -> Self {
        Self {
            day,
            events: Vec::new(),
            elimination: Elimination::Nobody,
            final_words: None,
        }
    }
    pub fn statements(&self) -> impl Iterator<Item = (&Name, &str)> {
        self.events.iter().filter_map(|e| match e {
            Event::Statement {
                player_id,
                statement,
            } => Some((player_id, statement.as_str())),
            Event::Vote { .. } => None,
        })
    }
    pub fn votes(&self) -> impl Iterator<Item = (&Name, &Ballot)> {
        self.events.iter().filter_map(|e| match e {
            Event::Vote {
                player_id, vote, ..
            } => Some((player_id, vote)),
            Event::Statement { .. } => None,
        })
    }
}
