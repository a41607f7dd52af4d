use std::collections::HashSet;

use rand::Rng;

use crate::error::EngineError;
use crate::grid::{Grid, Position};

/// Places food on a cell chosen uniformly from `grid \ occupied`.
///
/// Fails with [`EngineError::BoardFull`] when every cell is occupied.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Position>,
) -> Result<Position, EngineError> {
    grid.random_empty_cell(rng, occupied)
}
