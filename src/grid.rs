use std::collections::HashSet;

use rand::Rng;

use crate::config::MIN_GRID_CELLS;
use crate::error::EngineError;

/// Rejection sampling is only tried while the excluded share stays below 1/N.
const SPARSE_FILL_DENOMINATOR: usize = 4;

/// Attempts made by rejection sampling before enumerating free cells.
const SPARSE_SAMPLE_ATTEMPTS: usize = 32;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a projected head can sit outside the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square playfield carved out of a fixed-size canvas.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    cell_size: u32,
    canvas_size: u32,
    cols: u32,
}

impl Grid {
    /// Builds a grid of `canvas_size / cell_size` cells per side.
    ///
    /// Fails when the canvas does not divide evenly into cells or the board
    /// would be smaller than [`MIN_GRID_CELLS`] per side.
    pub fn new(cell_size: u32, canvas_size: u32) -> Result<Self, EngineError> {
        let invalid = EngineError::InvalidGridSize {
            cell_size,
            canvas_size,
            min_cols: MIN_GRID_CELLS,
        };

        if cell_size == 0 || canvas_size == 0 || canvas_size % cell_size != 0 {
            return Err(invalid);
        }

        let cols = canvas_size / cell_size;
        if cols < MIN_GRID_CELLS || i32::try_from(cols).is_err() {
            return Err(invalid);
        }

        Ok(Self {
            cell_size,
            canvas_size,
            cols,
        })
    }

    #[must_use]
    pub fn cell_size(self) -> u32 {
        self.cell_size
    }

    #[must_use]
    pub fn canvas_size(self) -> u32 {
        self.canvas_size
    }

    #[must_use]
    pub fn cols(self) -> u32 {
        self.cols
    }

    #[must_use]
    pub fn rows(self) -> u32 {
        self.cols
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        self.cols as usize * self.rows() as usize
    }

    /// Returns the cell at the centre of the board (rounded down).
    #[must_use]
    pub fn center(self) -> Position {
        Position::new(self.width() / 2, self.height() / 2)
    }

    /// Returns true when the position lies inside the hard walls.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width()
            && position.y < self.height()
    }

    /// Iterates every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Returns the pixel origin of `position` on the canvas.
    #[must_use]
    pub fn cell_origin(self, position: Position) -> (i64, i64) {
        let size = i64::from(self.cell_size);
        (i64::from(position.x) * size, i64::from(position.y) * size)
    }

    /// Picks a cell uniformly from the cells not in `excluding`.
    ///
    /// Sparse boards use rejection sampling; dense boards (or unlucky
    /// samples) fall back to enumerating the free cells.
    pub fn random_empty_cell<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        excluding: &HashSet<Position>,
    ) -> Result<Position, EngineError> {
        let total = self.total_cells();
        let blocked = excluding
            .iter()
            .filter(|position| self.contains(**position))
            .count();

        if blocked >= total {
            return Err(EngineError::BoardFull);
        }

        if blocked * SPARSE_FILL_DENOMINATOR < total {
            for _ in 0..SPARSE_SAMPLE_ATTEMPTS {
                let candidate = Position::new(
                    rng.gen_range(0..self.width()),
                    rng.gen_range(0..self.height()),
                );
                if !excluding.contains(&candidate) {
                    return Ok(candidate);
                }
            }
        }

        let free: Vec<Position> = self
            .cells()
            .filter(|position| !excluding.contains(position))
            .collect();

        if free.is_empty() {
            return Err(EngineError::BoardFull);
        }

        Ok(free[rng.gen_range(0..free.len())])
    }

    fn width(self) -> i32 {
        // Checked against i32::MAX in `new`.
        self.cols as i32
    }

    fn height(self) -> i32 {
        self.width()
    }
}
