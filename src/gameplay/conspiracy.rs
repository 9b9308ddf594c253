use super::*;
use crate::Position;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// One mafia member's kill vote, with the reason they gave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KillVote {
    #[serde(rename = "player_id")]
    pub voter: Name,
    #[serde(rename = "vote")]
    pub target: Name,
    pub reason: String,
}

/// The night's kill votes.
///
/// Regular mafia votes accumulate first. A living don then decides alone:
/// the decision is appended as one more vote and becomes the target as-is.
/// Without a don, the plurality wins and ties are broken uniformly at random.
#[derive(Debug, Clone, Default)]
pub struct Conspiracy(Vec<KillVote>);

impl Conspiracy {
    pub fn votes(&self) -> &[KillVote] {
        &self.0
    }
    pub fn vote(&mut self, voter: Position, target: Position, reason: String) {
        self.0.push(KillVote {
            voter: Name(voter),
            target: Name(target),
            reason,
        });
    }
    /// Don override. Regular votes are kept for the record only.
    pub fn decide(&mut self, don: Position, target: Position, reason: String) -> Position {
        self.vote(don, target, reason);
        target
    }
    /// Most-voted target, random among ties. None if nobody voted.
    pub fn plurality<R>(&self, rng: &mut R) -> Option<Position>
    where
        R: Rng + ?Sized,
    {
        let mut counts = Vec::<(Position, usize)>::new();
        for vote in self.0.iter() {
            match counts.iter_mut().find(|(p, _)| *p == vote.target.position()) {
                Some((_, n)) => *n += 1,
                None => counts.push((vote.target.position(), 1)),
            }
        }
        let max = counts.iter().map(|(_, n)| *n).max()?;
        counts
            .iter()
            .filter(|(_, n)| *n == max)
            .map(|(p, _)| *p)
            .collect::<Vec<_>>()
            .choose(rng)
            .copied()
    }
    pub fn into_votes(self) -> Vec<KillVote> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn don_overrides_split_votes() {
        let mut c = Conspiracy::default();
        c.vote(1, 4, "quiet".into());
        c.vote(2, 5, "loud".into());
        assert_eq!(c.decide(3, 6, "mine".into()), 6);
        assert_eq!(c.votes().len(), 3);
        assert_eq!(c.votes()[2].voter, Name(3));
    }
    #[test]
    fn don_overrides_unanimous_votes() {
        let mut c = Conspiracy::default();
        c.vote(1, 4, String::new());
        c.vote(2, 4, String::new());
        assert_eq!(c.decide(3, 7, String::new()), 7);
    }
    #[test]
    fn plurality_picks_majority() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut c = Conspiracy::default();
        c.vote(1, 4, String::new());
        c.vote(2, 4, String::new());
        c.vote(3, 9, String::new());
        assert_eq!(c.plurality(rng), Some(4));
    }
    #[test]
    fn plurality_breaks_ties_without_bias() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let mut c = Conspiracy::default();
        c.vote(0, 3, String::new());
        c.vote(1, 3, String::new());
        c.vote(2, 8, String::new());
        c.vote(5, 8, String::new());
        let trials = 4000;
        let threes = (0..trials)
            .map(|_| c.plurality(rng).unwrap())
            .inspect(|t| assert!(*t == 3 || *t == 8))
            .filter(|t| *t == 3)
            .count();
        let share = threes as f64 / trials as f64;
        assert!((0.45..0.55).contains(&share), "share of X = {}", share);
    }
    #[test]
    fn plurality_without_votes() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(Conspiracy::default().plurality(rng), None);
    }
}
