use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Produces a mine mask for a board. Implementations must mark exactly
/// `config.mines` cells.
pub trait MinePlacer {
    fn place_mines(&mut self, config: GameConfig) -> Array2<bool>;
}

/// Uniform rejection-sampling placement: draw random positions and retry
/// collisions until enough distinct cells are mines. [`GameConfig`] keeps at
/// least one cell free, so the loop always terminates; expected iterations
/// degrade on very dense boards but correctness does not.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl MinePlacer for RandomPlacer {
    fn place_mines(&mut self, config: GameConfig) -> Array2<bool> {
        let mut mask: Array2<bool> = Array2::default([config.rows as usize, config.cols as usize]);
        let mut placed: CellCount = 0;

        while placed < config.mines {
            let row = self.rng.random_range(0..config.rows);
            let col = self.rng.random_range(0..config.cols);
            let slot = &mut mask[grid_index((row, col))];
            if !*slot {
                *slot = true;
                placed += 1;
            }
        }

        log::debug!(
            "placed {} mines on a {}x{} board",
            placed,
            config.rows,
            config.cols
        );
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_count(mask: &Array2<bool>) -> usize {
        mask.iter().filter(|&&is_mine| is_mine).count()
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        let config = GameConfig::new(16, 16, 40);
        let mask = RandomPlacer::from_seed(1).place_mines(config);
        assert_eq!(mine_count(&mask), 40);
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let config = GameConfig::new(9, 9, 10);
        let first = RandomPlacer::from_seed(42).place_mines(config);
        let second = RandomPlacer::from_seed(42).place_mines(config);
        assert_eq!(first, second);
    }

    #[test]
    fn rejection_sampling_terminates_on_dense_boards() {
        // one safe cell left after clamping
        let config = GameConfig::new(4, 4, 99);
        assert_eq!(config.mines, 15);
        let mask = RandomPlacer::from_seed(3).place_mines(config);
        assert_eq!(mine_count(&mask), 15);
    }

    #[test]
    fn zero_mines_is_a_valid_layout() {
        let config = GameConfig::new(3, 3, 0);
        let mask = RandomPlacer::from_seed(0).place_mines(config);
        assert_eq!(mine_count(&mask), 0);
    }
}
