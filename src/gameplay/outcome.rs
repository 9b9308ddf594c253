use crate::roles::Role;
use serde::Serialize;

/// State of the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    GoodWins,
    MafiaWins,
}

impl Outcome {
    /// Win condition over alive counts. No mafia left means the town won;
    /// mafia at parity or better means the mafia won.
    pub fn evaluate(mafia: usize, good: usize) -> Self {
        if mafia == 0 {
            Self::GoodWins
        } else if mafia >= good {
            Self::MafiaWins
        } else {
            Self::Ongoing
        }
    }
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
    pub fn winner(&self) -> &'static str {
        match self {
            Self::GoodWins => "Good players win!",
            Self::MafiaWins => "Mafia wins!",
            Self::Ongoing => "No winner yet.",
        }
    }
    pub fn reason(&self) -> &'static str {
        match self {
            Self::GoodWins => "All Mafia members were eliminated.",
            Self::MafiaWins => "Mafia outnumbered the good players.",
            Self::Ongoing => "The game is still in progress.",
        }
    }
}

impl Outcome {
    /// Evaluates the roles of the players still alive.
    pub fn judge<'a, I>(alive: I) -> Self
    where
        I: IntoIterator<Item = &'a Role>,
    {
        let (mafia, good) = alive
            .into_iter()
            .fold((0, 0), |(m, g), r| match r.is_mafia() {
                true => (m + 1, g),
                false => (m, g + 1),
            });
        Self::evaluate(mafia, good)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.winner())
    }
}

/// Exported form of a finished game's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub winner: &'static str,
    pub reason: &'static str,
}

impl From<Outcome> for Verdict {
    fn from(outcome: Outcome) -> Self {
        Self {
            winner: outcome.winner(),
            reason: outcome.reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn truth_table() {
        for mafia in 0..=3 {
            for good in 0..=7 {
                let outcome = Outcome::evaluate(mafia, good);
                match (mafia == 0, mafia >= good) {
                    (true, _) => assert_eq!(outcome, Outcome::GoodWins),
                    (false, true) => assert_eq!(outcome, Outcome::MafiaWins),
                    (false, false) => assert_eq!(outcome, Outcome::Ongoing),
                }
            }
        }
    }
    #[test]
    fn conditions_exclusive_except_empty_table() {
        for mafia in 0..=10usize {
            for good in 0..=10usize {
                let both = mafia == 0 && mafia >= good;
                assert_eq!(both, mafia == 0 && good == 0);
            }
        }
    }
    #[test]
    fn from_alive_roles() {
        use Role::*;
        assert_eq!(Outcome::judge(&[Civilian, Detective, Civilian]), Outcome::GoodWins);
        assert_eq!(Outcome::judge(&[Don, Civilian]), Outcome::MafiaWins);
        assert_eq!(Outcome::judge(&[Mafia, Don, Civilian, Civilian]), Outcome::MafiaWins);
        assert_eq!(
            Outcome::judge(&[Mafia, Civilian, Civilian, Detective]),
            Outcome::Ongoing
        );
    }
    #[test]
    fn verdict_text() {
        let v = Verdict::from(Outcome::GoodWins);
        assert_eq!(v.winner, "Good players win!");
        assert_eq!(v.reason, "All Mafia members were eliminated.");
    }
}
