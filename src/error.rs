use std::io;

use thiserror::Error;

/// Failures raised by the game engine itself.
///
/// Collisions are not errors; they end the game through the phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum EngineError {
    /// The canvas cannot be divided into a playable square grid.
    #[error(
        "canvas size {canvas_size} is not a positive multiple of cell size {cell_size} \
         giving at least {min_cols} columns"
    )]
    InvalidGridSize {
        cell_size: u32,
        canvas_size: u32,
        min_cols: u32,
    },

    /// Every cell is occupied, so no food can be placed.
    #[error("no empty cell left on the board")]
    BoardFull,

    /// An explicit layout breaks a board invariant.
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
}

/// Failures while loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level failures surfaced by the terminal host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("failed to initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::EngineError;

    #[test]
    fn invalid_grid_size_message_names_both_sizes() {
        let message = EngineError::InvalidGridSize {
            cell_size: 7,
            canvas_size: 600,
            min_cols: 4,
        }
        .to_string();

        assert!(message.contains("600"));
        assert!(message.contains('7'));
    }
}
