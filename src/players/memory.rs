use crate::gameplay::*;
use crate::*;

/// Private knowledge a player carries between phases.
///
/// Investigations belong to the detective, don guesses to the mafia
/// faction, statements to everyone. Nothing here is ever shown to another
/// player.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    investigations: Vec<(Position, bool)>,
    guesses: Vec<(Epoch, Position, bool)>,
    statements: Vec<String>,
}

impl Memory {
    pub fn investigated(&mut self, target: Position, mafia: bool) {
        self.investigations.push((target, mafia));
    }
    pub fn guessed(&mut self, night: Epoch, target: Position, detective: bool) {
        self.guesses.push((night, target, detective));
    }
    pub fn said(&mut self, statement: &str) {
        self.statements.push(statement.to_string());
    }
    pub fn investigations(&self) -> &[(Position, bool)] {
        &self.investigations
    }
    pub fn guesses(&self) -> &[(Epoch, Position, bool)] {
        &self.guesses
    }
    pub fn statements(&self) -> &[String] {
        &self.statements
    }
    /// Investigation history as shown to the detective.
    pub fn render_investigations(&self) -> String {
        self.investigations
            .iter()
            .map(|(p, m)| format!("{} - Mafia: {}\n", Name(*p), m))
            .collect()
    }
    /// Don-guess history as shown to the mafia faction.
    pub fn render_guesses(&self) -> String {
        self.guesses
            .iter()
            .map(|(n, p, d)| format!("night: {} - guessed {} - is_detective? {}\n", n, Name(*p), d))
            .collect()
    }
}
