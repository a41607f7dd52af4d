use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::config::{TERMINAL_COLUMNS_PER_CELL, Theme};
use crate::grid::{Grid, Position};
use crate::surface::{Paint, Surface};

/// Glyph drawn for one terminal column of a painted cell.
const CELL_GLYPH: &str = " ";

/// Surface that rasterises pixel rectangles down to grid cells.
///
/// It is the terminal host's canvas: the engine paints into it, then it is
/// drawn as a ratatui widget with two terminal columns per cell.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    cols: u32,
    rows: u32,
    cell_size: u32,
    cells: Vec<Paint>,
    theme: &'static Theme,
}

impl CellCanvas {
    /// Creates a background-filled canvas sized for `grid`.
    #[must_use]
    pub fn new(grid: Grid, theme: &'static Theme) -> Self {
        Self {
            cols: grid.cols(),
            rows: grid.rows(),
            cell_size: grid.cell_size(),
            cells: vec![Paint::Background; grid.total_cells()],
            theme,
        }
    }

    /// Returns the paint of a cell, or `None` outside the canvas.
    #[must_use]
    pub fn paint_at(&self, position: Position) -> Option<Paint> {
        let index = self.index(i64::from(position.x), i64::from(position.y))?;
        Some(self.cells[index])
    }

    /// Counts cells holding `paint`.
    #[must_use]
    pub fn count(&self, paint: Paint) -> usize {
        self.cells.iter().filter(|cell| **cell == paint).count()
    }

    /// Terminal columns and rows needed to show the whole canvas.
    #[must_use]
    pub fn terminal_size(&self) -> (u16, u16) {
        let width = self.cols.saturating_mul(u32::from(TERMINAL_COLUMNS_PER_CELL));
        (
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(self.rows).unwrap_or(u16::MAX),
        )
    }

    fn index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 || col >= i64::from(self.cols) || row >= i64::from(self.rows) {
            return None;
        }
        usize::try_from(row * i64::from(self.cols) + col).ok()
    }

    fn color(&self, paint: Paint) -> Color {
        match paint {
            Paint::Background => self.theme.background,
            Paint::SnakeHead => self.theme.snake_head,
            Paint::SnakeBody => self.theme.snake_body,
            Paint::Food => self.theme.food,
        }
    }
}

impl Surface for CellCanvas {
    fn fill_background(&mut self, _width: u32, _height: u32) {
        self.cells.fill(Paint::Background);
    }

    fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, paint: Paint) {
        if width == 0 || height == 0 {
            return;
        }

        let size = i64::from(self.cell_size);
        let first_col = x.div_euclid(size);
        let first_row = y.div_euclid(size);
        let last_col = (x + i64::from(width) - 1).div_euclid(size);
        let last_row = (y + i64::from(height) - 1).div_euclid(size);

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                if let Some(index) = self.index(col, row) {
                    self.cells[index] = paint;
                }
            }
        }
    }
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.rows {
            let Ok(row_offset) = u16::try_from(row) else {
                break;
            };
            let y = area.y.saturating_add(row_offset);
            if y >= area.bottom() {
                break;
            }

            for col in 0..self.cols {
                let Some(column_offset) = u16::try_from(col)
                    .ok()
                    .and_then(|col| col.checked_mul(TERMINAL_COLUMNS_PER_CELL))
                else {
                    break;
                };
                let x = area.x.saturating_add(column_offset);
                if x >= area.right() {
                    break;
                }

                let Some(index) = self.index(i64::from(col), i64::from(row)) else {
                    continue;
                };
                let style = Style::new().bg(self.color(self.cells[index]));
                for dx in 0..TERMINAL_COLUMNS_PER_CELL {
                    let column = x.saturating_add(dx);
                    if column < area.right() {
                        buf.set_string(column, y, CELL_GLYPH, style);
                    }
                }
            }
        }
    }
}
