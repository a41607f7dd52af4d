//! Host-facing engine: binds a surface, maps key input, paces ticks against
//! host frames and renders after every frame.
//!
//! The pending direction is a plain field. A host that delivers input on a
//! different thread from `play` must put the whole engine behind a lock.

use log::{debug, info};

use crate::config::{DEFAULT_FRAME_DIVISOR, DEFAULT_MIN_FRAME_DIVISOR, Settings};
use crate::error::EngineError;
use crate::game::{GameState, Phase, Snapshot, Step};
use crate::grid::Grid;
use crate::input::Direction;
use crate::surface::{self, Surface};

/// How many host frames pass per simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FramePacing {
    divisor: u32,
    min_divisor: u32,
    speedup_step: u32,
    counter: u32,
}

impl FramePacing {
    /// Fixed pace: one tick every `divisor` frames.
    #[must_use]
    pub fn fixed(divisor: u32) -> Self {
        Self::accelerating(divisor, divisor, 0)
    }

    /// Starts at `divisor` and drops by `speedup_step` per food eaten, never
    /// below `min_divisor`.
    #[must_use]
    pub fn accelerating(divisor: u32, min_divisor: u32, speedup_step: u32) -> Self {
        let divisor = divisor.max(1);
        Self {
            divisor,
            min_divisor: min_divisor.clamp(1, divisor),
            speedup_step,
            counter: 0,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::accelerating(
            settings.frame_divisor,
            settings.min_frame_divisor,
            settings.speedup_step,
        )
    }

    /// Counts one frame; returns true when this frame should tick.
    ///
    /// The first frame ticks, then every `divisor`-th one after it.
    pub fn on_frame(&mut self) -> bool {
        let due = self.counter == 0;
        self.counter += 1;
        if self.counter >= self.divisor {
            self.counter = 0;
        }
        due
    }

    /// Shortens the divisor after a meal when acceleration is enabled.
    pub fn on_food_eaten(&mut self) {
        if self.speedup_step == 0 {
            return;
        }
        self.divisor = self
            .divisor
            .saturating_sub(self.speedup_step)
            .max(self.min_divisor);
        if self.counter >= self.divisor {
            self.counter = 0;
        }
    }

    #[must_use]
    pub fn divisor(&self) -> u32 {
        self.divisor
    }
}

impl Default for FramePacing {
    fn default() -> Self {
        Self::accelerating(DEFAULT_FRAME_DIVISOR, DEFAULT_MIN_FRAME_DIVISOR, 0)
    }
}

/// What a single frame did.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FrameReport {
    /// `None` when the frame fell between ticks.
    pub step: Option<Step>,
    pub snapshot: Snapshot,
}

/// Snake engine bound to a drawing surface.
#[derive(Debug)]
pub struct Engine<S: Surface> {
    surface: S,
    state: GameState,
    pacing: FramePacing,
}

impl<S: Surface> Engine<S> {
    /// Creates an engine for a square canvas of `canvas_size` pixels split
    /// into `cell_size` pixel cells, with the default frame pacing.
    pub fn new(surface: S, cell_size: u32, canvas_size: u32) -> Result<Self, EngineError> {
        let grid = Grid::new(cell_size, canvas_size)?;
        let state = GameState::new(grid)?;
        Ok(Self::from_state(surface, state, FramePacing::default()))
    }

    /// Creates an engine from merged host settings.
    pub fn with_settings(surface: S, settings: &Settings) -> Result<Self, EngineError> {
        let grid = Grid::new(settings.cell_size, settings.canvas_size)?;
        let state = match settings.seed {
            Some(seed) => GameState::new_with_seed(grid, seed)?,
            None => GameState::new(grid)?,
        };
        Ok(Self::from_state(
            surface,
            state,
            FramePacing::from_settings(settings),
        ))
    }

    /// Wraps an existing simulation state.
    #[must_use]
    pub fn from_state(surface: S, state: GameState, pacing: FramePacing) -> Self {
        info!(
            "engine ready: {}x{} cells, {} frames per tick",
            state.grid().cols(),
            state.grid().rows(),
            pacing.divisor()
        );
        Self {
            surface,
            state,
            pacing,
        }
    }

    /// Forwards a raw key identifier; unrecognised keys are ignored.
    pub fn control(&mut self, key: &str) {
        match Direction::from_key(key) {
            Some(direction) => self.set_pending_direction(direction),
            None => debug!("ignoring key {key:?}"),
        }
    }

    /// Queues `direction` for the next tick (last write wins).
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.state.set_pending_direction(direction);
    }

    /// Advances pacing by one host frame, ticking when due.
    pub fn frame(&mut self) -> FrameReport {
        let step = self.pacing.on_frame().then(|| self.tick());
        FrameReport {
            step,
            snapshot: self.state.snapshot(),
        }
    }

    /// Runs one simulation tick regardless of pacing.
    pub fn tick(&mut self) -> Step {
        let step = self.state.tick();
        if step == Step::Ate {
            self.pacing.on_food_eaten();
        }
        step
    }

    /// Runs one host frame and redraws the bound surface.
    pub fn play(&mut self) -> FrameReport {
        let report = self.frame();
        surface::render(self.state.grid(), &report.snapshot, &mut self.surface);
        report
    }

    /// Redraws the current state without advancing anything.
    pub fn render(&mut self) {
        let snapshot = self.state.snapshot();
        surface::render(self.state.grid(), &snapshot, &mut self.surface);
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.phase() == Phase::Over
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.state.grid()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn pacing(&self) -> FramePacing {
        self.pacing
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Releases the bound surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
