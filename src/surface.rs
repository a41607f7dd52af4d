use crate::game::Snapshot;
use crate::grid::Grid;

/// Logical colour of a filled rectangle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Paint {
    Background,
    SnakeHead,
    SnakeBody,
    Food,
}

/// Drawing target bound to an engine.
///
/// Coordinates are canvas pixels with the origin at the top left.
pub trait Surface {
    /// Fills the whole canvas with [`Paint::Background`].
    fn fill_background(&mut self, width: u32, height: u32);

    /// Fills a `width` x `height` rectangle at `(x, y)`.
    fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, paint: Paint);
}

/// Draws one frame: background, every snake segment, then the food.
///
/// Only reads `snapshot`; drawing never feeds back into game state.
pub fn render<S: Surface + ?Sized>(grid: Grid, snapshot: &Snapshot, surface: &mut S) {
    let size = grid.cell_size();
    surface.fill_background(grid.canvas_size(), grid.canvas_size());

    for (index, segment) in snapshot.snake.iter().enumerate() {
        let (x, y) = grid.cell_origin(*segment);
        let paint = if index == 0 {
            Paint::SnakeHead
        } else {
            Paint::SnakeBody
        };
        surface.fill_rect(x, y, size, size, paint);
    }

    if let Some(food) = snapshot.food {
        let (x, y) = grid.cell_origin(food);
        surface.fill_rect(x, y, size, size, Paint::Food);
    }
}
