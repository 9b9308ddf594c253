use super::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Offline oracle that answers at random.
///
/// Mostly names a random seat in the `player_#` format, sometimes abstains,
/// and occasionally says something unparseable, so games against it walk
/// through every fallback path. Seeded, so a seeded game stays reproducible.
pub struct Fish(SmallRng);

impl Fish {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

#[async_trait::async_trait]
impl Oracle for Fish {
    fn model(&self) -> &str {
        "fish"
    }
    async fn complete(&mut self, _: &str, _: &str) -> anyhow::Result<String> {
        let rng = &mut self.0;
        Ok(match rng.random_range(0..16) {
            0 => String::from("I would rather not say."),
            1 | 2 => String::from("no one\nNot enough to go on yet."),
            _ => {
                let p = rng.random_range(0..N);
                format!("player_{}\nSomething about player_{} feels off.", p, p)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn same_seed_same_answers() {
        let mut a = Fish::new(17);
        let mut b = Fish::new(17);
        for _ in 0..20 {
            assert_eq!(
                a.complete("s", "u").await.unwrap(),
                b.complete("s", "u").await.unwrap()
            );
        }
    }
}
