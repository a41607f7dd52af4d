use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::Deserialize;

use crate::error::SettingsError;

const APP_DIR_NAME: &str = "canvas-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Smallest playable board side, in cells.
pub const MIN_GRID_CELLS: u32 = 4;

/// Segments in a freshly seeded snake (clamped to fit the board).
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Points awarded per food eaten.
pub const POINTS_PER_FOOD: u32 = 1;

/// Default pixels per cell.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Default canvas side in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 600;

/// Host frames per simulation tick.
pub const DEFAULT_FRAME_DIVISOR: u32 = 8;

/// Lower bound for the divisor when acceleration is enabled.
pub const DEFAULT_MIN_FRAME_DIVISOR: u32 = 3;

/// Host frame rate of the terminal runtime.
pub const DEFAULT_FPS: u32 = 60;

/// Engine and host settings, merged from defaults, a JSON file and CLI flags.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub cell_size: u32,
    pub canvas_size: u32,
    /// Frames per tick at the start of a game.
    pub frame_divisor: u32,
    pub min_frame_divisor: u32,
    /// Divisor decrease per food eaten; zero keeps the pace fixed.
    pub speedup_step: u32,
    /// Fixed RNG seed for reproducible food placement.
    pub seed: Option<u64>,
    pub fps: u32,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            canvas_size: DEFAULT_CANVAS_SIZE,
            frame_divisor: DEFAULT_FRAME_DIVISOR,
            min_frame_divisor: DEFAULT_MIN_FRAME_DIVISOR,
            speedup_step: 0,
            seed: None,
            fps: DEFAULT_FPS,
            theme: THEME_CLASSIC.name.to_ascii_lowercase(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the per-user file when `None`.
    ///
    /// A missing per-user file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match Self::load_from_path(&settings_path()) {
                Err(SettingsError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
                    Ok(Self::default())
                }
                other => other,
            },
        }
    }

    fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Returns the theme named by `self.theme`, falling back to the first one.
    #[must_use]
    pub fn theme(&self) -> &'static Theme {
        theme_by_name(&self.theme).unwrap_or(&THEMES[0])
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Returns the default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push("canvas-snake.log");
    base
}

/// A color theme applied to the canvas and the HUD.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    background: Color::Black,
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    background: Color::Black,
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    hud_muted: Color::DarkGray,
    menu_title: Color::Cyan,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    background: Color::Black,
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    hud_muted: Color::DarkGray,
    menu_title: Color::Magenta,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks a theme up by case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;
