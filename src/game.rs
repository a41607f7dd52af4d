use std::collections::HashSet;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{INITIAL_SNAKE_LENGTH, POINTS_PER_FOOD};
use crate::error::EngineError;
use crate::food;
use crate::grid::{Grid, Position};
use crate::input::{Direction, direction_change_is_valid};
use crate::rules::{self, Collision, Decision};
use crate::snake::Snake;

/// Direction a freshly seeded snake travels in.
pub const INITIAL_HEADING: Direction = Direction::Left;

/// Coarse lifecycle of one game. `Over` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Running,
    Over,
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Collision(Collision),
    /// The snake covers the whole board; no food can be placed.
    BoardFilled,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Step {
    /// The game was already over; nothing changed.
    Idle,
    Moved,
    Ate,
    Ended(Outcome),
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Head first.
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub heading: Direction,
    pub score: u32,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub tick_count: u64,
}

/// Complete simulation state for one session, independent of any host.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    heading: Direction,
    pending: Option<Direction>,
    food: Option<Position>,
    score: u32,
    phase: Phase,
    outcome: Option<Outcome>,
    tick_count: u64,
    rng: StdRng,
}

impl GameState {
    /// Creates a game seeded from OS entropy.
    pub fn new(grid: Grid) -> Result<Self, EngineError> {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(grid: Grid, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, mut rng: StdRng) -> Result<Self, EngineError> {
        let start = grid.center();
        // The body trails to the right of the head; keep it on the board.
        let room = usize::try_from(i64::from(grid.cols()) - i64::from(start.x)).unwrap_or(1);
        let snake = Snake::straight(start, INITIAL_HEADING, INITIAL_SNAKE_LENGTH.min(room));
        let food = food::place(&mut rng, grid, &snake.occupied())?;

        Ok(Self {
            grid,
            snake,
            heading: INITIAL_HEADING,
            pending: None,
            food: Some(food),
            score: 0,
            phase: Phase::Running,
            outcome: None,
            tick_count: 0,
            rng,
        })
    }

    /// Creates a running state from an explicit layout, for replays and tests.
    ///
    /// Every segment must be on the board and distinct, and the food must be
    /// on a free cell.
    pub fn from_layout(
        grid: Grid,
        snake: Snake,
        heading: Direction,
        food: Position,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if !snake.segments().all(|segment| grid.contains(*segment)) {
            return Err(EngineError::InvalidLayout("snake segment outside the grid"));
        }
        if snake.occupied().len() != snake.len() {
            return Err(EngineError::InvalidLayout("snake segments overlap"));
        }
        if !grid.contains(food) || snake.occupies(food) {
            return Err(EngineError::InvalidLayout("food must sit on a free cell"));
        }

        Ok(Self {
            grid,
            snake,
            heading,
            pending: None,
            food: Some(food),
            score: 0,
            phase: Phase::Running,
            outcome: None,
            tick_count: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Records the latest direction input; the last call before a tick wins.
    ///
    /// A reversal of the current heading is ignored while the snake is
    /// longer than one cell.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.snake.len() > 1 && !direction_change_is_valid(self.heading, direction) {
            return;
        }
        self.pending = Some(direction);
    }

    /// Advances the simulation by one tick.
    ///
    /// Snake, food, score and phase are computed first and committed
    /// together, so a caller never sees a half-applied tick.
    pub fn tick(&mut self) -> Step {
        if self.phase == Phase::Over {
            return Step::Idle;
        }

        let heading = self.pending.take().unwrap_or(self.heading);
        let candidate = self.snake.advance(heading);

        match rules::decide(self.grid, &self.snake, candidate, self.food) {
            Decision::Collide(collision) => self.finish(Outcome::Collision(collision)),
            Decision::Move => {
                self.snake.move_to(candidate);
                self.heading = heading;
                self.tick_count += 1;
                debug!("tick {}: head at {:?}", self.tick_count, candidate);
                Step::Moved
            }
            Decision::Eat => {
                let mut snake = self.snake.clone();
                snake.grow(candidate);
                let next_food = food::place(&mut self.rng, self.grid, &snake.occupied());

                self.snake = snake;
                self.heading = heading;
                self.score += POINTS_PER_FOOD;
                self.tick_count += 1;
                debug!(
                    "tick {}: ate at {:?}, score {}",
                    self.tick_count, candidate, self.score
                );

                match next_food {
                    Ok(position) => {
                        self.food = Some(position);
                        Step::Ate
                    }
                    Err(error) => {
                        debug_assert_eq!(error, EngineError::BoardFull);
                        self.food = None;
                        self.finish(Outcome::BoardFilled)
                    }
                }
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Step {
        self.phase = Phase::Over;
        self.outcome = Some(outcome);
        info!(
            "game over after {} ticks: {:?}, score {}",
            self.tick_count, outcome, self.score
        );
        Step::Ended(outcome)
    }

    /// Copies the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            heading: self.heading,
            score: self.score,
            phase: self.phase,
            outcome: self.outcome,
            tick_count: self.tick_count,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direction used by the last committed tick.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns every occupied cell.
    #[must_use]
    pub fn occupied(&self) -> HashSet<Position> {
        self.snake.occupied()
    }
}
