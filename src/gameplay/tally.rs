use super::*;
use crate::Position;
use serde::Serialize;
use serde::Serializer;

/// Result of a day vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elimination {
    Nobody,
    Voted(Position),
}

impl std::fmt::Display for Elimination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Voted(p) => write!(f, "{} was voted out", Name(*p)),
            Self::Nobody => write!(f, "no elimination this round"),
        }
    }
}

impl Serialize for Elimination {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Day-phase vote count.
///
/// Candidates keep the order they were registered in, so the count is
/// reproducible. Abstentions are counted apart from named votes.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: Vec<(Position, usize)>,
    abstentions: usize,
}

impl Tally {
    /// Starts a tally where every candidate has zero votes.
    pub fn new(candidates: &[Position]) -> Self {
        Self {
            counts: candidates.iter().map(|&p| (p, 0)).collect(),
            abstentions: 0,
        }
    }
    pub fn cast(&mut self, ballot: Ballot) {
        match ballot {
            Ballot::Abstain => self.abstentions += 1,
            Ballot::Target(p) => match self.counts.iter_mut().find(|(c, _)| *c == p) {
                Some((_, n)) => *n += 1,
                None => self.counts.push((p, 1)),
            },
        }
    }
    pub fn votes(&self, pos: Position) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == pos)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
    pub fn abstentions(&self) -> usize {
        self.abstentions
    }
    /// Applies the elimination rules.
    ///
    /// A tie between the top two totals counts as no decisive maximum, so
    /// nobody goes regardless of abstentions. Otherwise the leader goes only
    /// if their count strictly exceeds the abstentions.
    pub fn verdict(&self) -> Elimination {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        let (leader, first) = match ranked.first() {
            Some(&top) => top,
            None => return Elimination::Nobody,
        };
        let second = ranked.get(1).map(|(_, n)| *n).unwrap_or(0);
        let decisive = if first == second { 0 } else { first };
        if decisive <= self.abstentions {
            Elimination::Nobody
        } else {
            Elimination::Voted(leader)
        }
    }
}

impl FromIterator<Ballot> for Tally {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Ballot>,
    {
        let mut tally = Self::default();
        iter.into_iter().for_each(|b| tally.cast(b));
        tally
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (p, n) in self.counts.iter().filter(|(_, n)| *n > 0) {
            write!(f, "{}: {}, ", Name(*p), n)?;
        }
        write!(f, "no one: {}", self.abstentions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(candidates: &[Position], votes: &[(Ballot, usize)]) -> Tally {
        let mut t = Tally::new(candidates);
        for &(ballot, n) in votes {
            (0..n).for_each(|_| t.cast(ballot));
        }
        t
    }

    #[test]
    fn tie_at_top_blocks_elimination() {
        let alive = (0..10).collect::<Vec<_>>();
        let t = tally(
            &alive,
            &[
                (Ballot::Target(1), 3),
                (Ballot::Target(2), 3),
                (Ballot::Target(3), 1),
            ],
        );
        assert_eq!(t.abstentions(), 0);
        assert_eq!(t.verdict(), Elimination::Nobody);
    }
    #[test]
    fn leader_equal_to_abstentions_is_spared() {
        let alive = (0..8).collect::<Vec<_>>();
        let t = tally(&alive, &[(Ballot::Target(0), 4), (Ballot::Abstain, 4)]);
        assert_eq!(t.verdict(), Elimination::Nobody);
    }
    #[test]
    fn leader_above_abstentions_is_eliminated() {
        let alive = (0..9).collect::<Vec<_>>();
        let t = tally(&alive, &[(Ballot::Target(0), 5), (Ballot::Abstain, 4)]);
        assert_eq!(t.verdict(), Elimination::Voted(0));
    }
    #[test]
    fn everyone_abstains() {
        let alive = (0..6).collect::<Vec<_>>();
        let t = tally(&alive, &[(Ballot::Abstain, 6)]);
        assert_eq!(t.verdict(), Elimination::Nobody);
    }
    #[test]
    fn single_vote_beats_zero_abstentions() {
        let alive = (0..4).collect::<Vec<_>>();
        let t = tally(&alive, &[(Ballot::Target(3), 1)]);
        assert_eq!(t.votes(3), 1);
        assert_eq!(t.verdict(), Elimination::Voted(3));
    }
    #[test]
    fn tie_ignores_abstentions() {
        let alive = (0..7).collect::<Vec<_>>();
        let t = tally(
            &alive,
            &[(Ballot::Target(5), 3), (Ballot::Target(6), 3), (Ballot::Abstain, 1)],
        );
        assert_eq!(t.verdict(), Elimination::Nobody);
    }
    #[test]
    fn empty_tally() {
        assert_eq!(Tally::default().verdict(), Elimination::Nobody);
    }
    #[test]
    fn collects_from_ballots() {
        let t = [Ballot::Target(2), Ballot::Abstain, Ballot::Target(2)]
            .into_iter()
            .collect::<Tally>();
        assert_eq!(t.votes(2), 2);
        assert_eq!(t.abstentions(), 1);
        assert_eq!(t.verdict(), Elimination::Voted(2));
    }
}
