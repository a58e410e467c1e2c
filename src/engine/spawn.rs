use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::{Grid, Tile};

/// A tile placed by [`Spawner::spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Places new tiles using an owned random source, seeded once per session.
#[derive(Debug, Clone)]
pub struct Spawner<R = StdRng> {
    rng: R,
}

impl Spawner<StdRng> {
    /// Deterministic spawner; the same seed yields the same tile sequence.
    pub fn seeded(seed: u64) -> Self {
        Spawner::new(StdRng::seed_from_u64(seed))
    }

    /// Spawner seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Spawner::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Spawner<R> {
    pub fn new(rng: R) -> Self {
        Spawner { rng }
    }

    /// Insert a 2 (90%) or 4 (10%) into an empty cell chosen uniformly at random.
    ///
    /// Returns `None` and leaves the grid untouched if there is no empty cell.
    pub fn spawn(&mut self, grid: &mut Grid) -> Option<Placement> {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.rng.gen_range(0..empty.len())];
        let value = generate_random_tile(&mut self.rng);
        grid.set(row, col, value);
        debug!("spawned {value} at ({row}, {col})");
        Some(Placement { row, col, value })
    }
}

fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..10) < 9 {
        2
    } else {
        4
    }
}
