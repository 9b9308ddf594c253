use super::*;
use crate::*;
use rand::Rng;
use rand::seq::SliceRandom;

/// Roles for every seat, indexed by position.
///
/// Always a permutation of the fixed multiset: six civilians, one detective,
/// two mafia, one don. Both constructors enforce it, so the derived lookups
/// (`don`, `detective`, `mafia`) are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment(Vec<Role>);

impl Assignment {
    /// Shuffles the fixed multiset uniformly.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut roles = Self::multiset();
        roles.shuffle(rng);
        Self(roles)
    }
    /// Accepts an explicit seating, as long as it is a permutation of the
    /// fixed multiset.
    pub fn preassigned(roles: Vec<Role>) -> anyhow::Result<Self> {
        let mut sorted = roles.clone();
        let mut wanted = Self::multiset();
        sorted.sort();
        wanted.sort();
        if sorted != wanted {
            anyhow::bail!(
                "need {} civilian, {} detective, {} mafia, {} don; got {:?}",
                CIVILIANS,
                DETECTIVES,
                MAFIOSI,
                DONS,
                roles.iter().map(Role::to_string).collect::<Vec<_>>()
            );
        }
        Ok(Self(roles))
    }
    fn multiset() -> Vec<Role> {
        std::iter::empty()
            .chain(std::iter::repeat_n(Role::Civilian, CIVILIANS))
            .chain(std::iter::repeat_n(Role::Detective, DETECTIVES))
            .chain(std::iter::repeat_n(Role::Mafia, MAFIOSI))
            .chain(std::iter::repeat_n(Role::Don, DONS))
            .collect()
    }
}

impl Assignment {
    pub fn roles(&self) -> &[Role] {
        &self.0
    }
    pub fn role(&self, pos: Position) -> Role {
        self.0[pos]
    }
    /// The whole mafia faction, don included, in seat order.
    pub fn mafia(&self) -> Vec<Position> {
        self.positions(Role::is_mafia)
    }
    pub fn don(&self) -> Position {
        self.first(Role::Don)
    }
    pub fn detective(&self) -> Position {
        self.first(Role::Detective)
    }
    /// What a player at `pos` is told about the mafia at construction.
    /// The faction sees itself; everyone else sees nothing.
    pub fn faction(&self, pos: Position) -> Vec<Position> {
        if self.role(pos).is_mafia() {
            self.mafia()
        } else {
            Vec::new()
        }
    }
    fn positions<F>(&self, f: F) -> Vec<Position>
    where
        F: Fn(&Role) -> bool,
    {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, r)| f(r))
            .map(|(i, _)| i)
            .collect()
    }
    fn first(&self, role: Role) -> Position {
        self.0
            .iter()
            .position(|r| *r == role)
            .unwrap_or_else(|| unreachable!("{} present by construction", role))
    }
}
