use super::*;
use serde::Serialize;

/// One phase in the game log.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Record {
    Night(NightRecord),
    Day(DayRecord),
}

/// The game log: phase records in the order they happened.
///
/// Append-only. Don guesses are also collected on the side, since the
/// export lists them separately from the nights they happened in.
#[derive(Debug, Clone, Default)]
pub struct Chronicle {
    records: Vec<Record>,
    guesses: Vec<DonGuess>,
}

impl Chronicle {
    pub fn night(&mut self, record: NightRecord) {
        if let Some(guess) = record.don_guess.as_ref() {
            self.guesses.push(guess.clone());
        }
        self.records.push(Record::Night(record));
    }
    pub fn day(&mut self, record: DayRecord) {
        self.records.push(Record::Day(record));
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn guesses(&self) -> &[DonGuess] {
        &self.guesses
    }
    pub fn nights(&self) -> impl Iterator<Item = &NightRecord> {
        self.records.iter().filter_map(|r| match r {
            Record::Night(n) => Some(n),
            Record::Day(_) => None,
        })
    }
    pub fn days(&self) -> impl Iterator<Item = &DayRecord> {
        self.records.iter().filter_map(|r| match r {
            Record::Day(d) => Some(d),
            Record::Night(_) => None,
        })
    }
}
