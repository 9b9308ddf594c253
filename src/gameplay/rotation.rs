use crate::Position;
use rand::Rng;

/// Turn order for a round: the alive players, rotated to start from a
/// uniformly random one. Relative seat order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation(Vec<Position>);

impl Rotation {
    pub fn random<R>(alive: &[Position], rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match alive.len() {
            0 => Self(Vec::new()),
            n => Self::from_start(alive, rng.random_range(0..n)),
        }
    }
    pub fn from_start(alive: &[Position], start: usize) -> Self {
        let mut order = alive.to_vec();
        if !order.is_empty() {
            order.rotate_left(start % alive.len());
        }
        Self(order)
    }
    pub fn order(&self) -> &[Position] {
        &self.0
    }
}

impl IntoIterator for Rotation {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn rotation_preserves_cyclic_order() {
        let alive = vec![0, 2, 3, 7, 9];
        assert_eq!(Rotation::from_start(&alive, 2).order(), &[3, 7, 9, 0, 2]);
        assert_eq!(Rotation::from_start(&alive, 0).order(), &[0, 2, 3, 7, 9]);
    }
    #[test]
    fn random_rotation_is_a_rotation() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let alive = vec![1, 4, 5, 6, 8];
        for _ in 0..100 {
            let order = Rotation::random(&alive, rng).into_iter().collect::<Vec<_>>();
            let start = alive.iter().position(|p| *p == order[0]).unwrap();
            assert_eq!(order, Rotation::from_start(&alive, start).order());
        }
    }
    #[test]
    fn random_rotation_varies_start() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let alive = (0..10).collect::<Vec<_>>();
        let starts = (0..200)
            .map(|_| Rotation::random(&alive, rng).order()[0])
            .collect::<std::collections::HashSet<_>>();
        assert!(starts.len() > 5);
    }
    #[test]
    fn empty_rotation() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!(Rotation::random(&[], rng).order().is_empty());
    }
}
