use super::*;
use crate::oracle::*;
use crate::roles::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Everything needed to seat a game, before anyone is seated.
///
/// Either one model fills every seat, or there is one model per seat.
/// Models and roles are paired first and the pairs are then shuffled
/// together, so preassigned roles keep their model while seating still
/// varies from game to game.
#[derive(Debug, Clone)]
pub struct Lobby {
    backends: Vec<Backend>,
    roles: Option<Vec<Role>>,
    seed: Option<u64>,
}

impl Lobby {
    pub fn from_models<S>(models: &[S]) -> anyhow::Result<Self>
    where
        S: AsRef<str>,
    {
        let backends = models
            .iter()
            .map(|m| Backend::try_from(m.as_ref()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let backends = match backends.len() {
            1 => vec![backends[0]; N],
            n if n == N => backends,
            n => anyhow::bail!("need 1 or {} models, got {}", N, n),
        };
        Ok(Self {
            backends,
            roles: None,
            seed: None,
        })
    }
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// Assigns roles, seats every oracle, and hands over the game.
    pub fn open(self) -> anyhow::Result<Game> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let assignment = match self.roles {
            Some(roles) => Assignment::preassigned(roles)?,
            None => Assignment::random(&mut rng),
        };
        let mut pairs = self
            .backends
            .into_iter()
            .zip(assignment.roles().iter().copied())
            .collect::<Vec<_>>();
        pairs.shuffle(&mut rng);
        let (backends, roles) = pairs.into_iter().unzip::<_, _, Vec<_>, Vec<_>>();
        let assignment = Assignment::preassigned(roles)?;
        let oracles = backends
            .into_iter()
            .map(|backend| backend.oracle(rng.random()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::info!(
            "[lobby] seated {}",
            oracles
                .iter()
                .map(|o| o.model())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Game::new(assignment, oracles, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::*;

    #[test]
    fn one_model_fills_the_table() {
        let lobby = Lobby::from_models(&["fish"]).unwrap();
        assert_eq!(lobby.backends.len(), N);
    }
    #[test]
    fn wrong_model_counts_are_rejected() {
        assert!(Lobby::from_models(&["fish", "fish"]).is_err());
        assert!(Lobby::from_models::<&str>(&[]).is_err());
        assert!(Lobby::from_models(&["gemini"]).is_err());
    }
    #[test]
    fn preassigned_roles_stay_with_their_model() {
        use Role::*;
        let roles = vec![
            Don, Civilian, Civilian, Mafia, Civilian, Detective, Civilian, Mafia, Civilian,
            Civilian,
        ];
        let game = Lobby::from_models(&["fish"])
            .unwrap()
            .with_roles(roles)
            .with_seed(3)
            .open()
            .unwrap();
        assert_eq!(game.assignment().mafia().len(), 3);
        assert!(Lobby::from_models(&["fish"]).unwrap().with_roles(vec![Don]).open().is_err());
    }
    #[tokio::test]
    async fn seeded_random_game_terminates() {
        let mut game = Lobby::from_models(&["fish"]).unwrap().with_seed(7).open().unwrap();
        let outcome = game.run().await;
        assert!(outcome.is_terminal());
        let dead = game.seats().iter().filter(|s| !s.is_alive()).count();
        assert!(dead <= N - 1);
        let alive = game.alive();
        let mafia = game.alive_mafia().len();
        assert_eq!(outcome, Outcome::evaluate(mafia, alive.len() - mafia));
        assert!(game.transcript().as_str().ends_with(&format!("{}\n", outcome.winner())));
    }
    #[tokio::test]
    async fn same_seed_same_game() {
        let mut a = Lobby::from_models(&["fish"]).unwrap().with_seed(21).open().unwrap();
        let mut b = Lobby::from_models(&["fish"]).unwrap().with_seed(21).open().unwrap();
        assert_eq!(a.run().await, b.run().await);
        assert_eq!(a.transcript(), b.transcript());
        assert_eq!(a.assignment(), b.assignment());
    }
    #[tokio::test]
    async fn many_seeds_all_terminate() {
        for seed in 0..25 {
            let mut game = Lobby::from_models(&["fish"]).unwrap().with_seed(seed).open().unwrap();
            assert!(game.run().await.is_terminal());
            assert!(game.chronicle().nights().count() <= N - 1);
        }
    }
}
