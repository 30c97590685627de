use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{Grid, Position};

/// Random draws before falling back to scanning for free cells
const RELOCATE_RETRIES: usize = 64;

/// A single piece of food on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Spawn food on a random cell not occupied by the snake
    pub fn spawn<R: Rng>(rng: &mut R, grid: &Grid, occupied: &[Position]) -> Self {
        // The snake starts at length 1 on a >= 2x2 grid, so a free
        // cell always exists; the center is an unreachable fallback.
        let position = random_free_cell(rng, grid, occupied).unwrap_or_else(|| grid.center());
        Self { position }
    }

    /// Move the food to a random cell outside `occupied`.
    ///
    /// Keeps the old position if the grid has no free cell left, which
    /// normal play never reaches.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, grid: &Grid, occupied: &[Position]) {
        if let Some(position) = random_free_cell(rng, grid, occupied) {
            self.position = position;
        }
    }
}

/// Uniformly sample a cell not in `occupied`: a bounded number of
/// rejection-sampling draws, then a direct pick from the free cells.
fn random_free_cell<R: Rng>(rng: &mut R, grid: &Grid, occupied: &[Position]) -> Option<Position> {
    for _ in 0..RELOCATE_RETRIES {
        let candidate = Position::new(
            rng.gen_range(0..grid.width),
            rng.gen_range(0..grid.height),
        );
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Position> = grid.cells().filter(|c| !occupied.contains(c)).collect();
    free.choose(rng).copied()
}
