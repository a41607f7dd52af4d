use canvas_snake::canvas::CellCanvas;
use canvas_snake::config::THEME_CLASSIC;
use canvas_snake::engine::{Engine, FramePacing};
use canvas_snake::game::{GameState, Outcome, Phase, Step};
use canvas_snake::grid::{Grid, Position};
use canvas_snake::input::Direction;
use canvas_snake::rules::{self, Collision, Decision};
use canvas_snake::snake::Snake;
use canvas_snake::surface::Paint;

fn ten_by_ten() -> Grid {
    Grid::new(20, 200).expect("200/20 is a valid grid")
}

fn body(cells: &[(i32, i32)]) -> Snake {
    Snake::from_segments(cells.iter().map(|&(x, y)| Position::new(x, y)).collect())
        .expect("non-empty body")
}

#[test]
fn eating_grows_snake_and_replaces_food() {
    let mut state = GameState::from_layout(
        ten_by_ten(),
        body(&[(5, 5)]),
        Direction::Right,
        Position::new(6, 5),
        42,
    )
    .expect("valid layout");

    assert_eq!(state.tick(), Step::Ate);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.snake, vec![Position::new(6, 5), Position::new(5, 5)]);
    assert_eq!(snapshot.score, 1);
    assert_eq!(snapshot.phase, Phase::Running);
    let food = snapshot.food.expect("food re-placed");
    assert!(!snapshot.snake.contains(&food));
}

#[test]
fn wall_hit_freezes_snake_food_and_score() {
    let mut state = GameState::from_layout(
        ten_by_ten(),
        body(&[(0, 5)]),
        Direction::Left,
        Position::new(3, 3),
        42,
    )
    .expect("valid layout");
    let before = state.snapshot();

    assert_eq!(state.tick(), Step::Ended(Outcome::Collision(Collision::Wall)));

    let after = state.snapshot();
    assert_eq!(after.phase, Phase::Over);
    assert_eq!(after.snake, before.snake);
    assert_eq!(after.food, before.food);
    assert_eq!(after.score, before.score);
}

#[test]
fn turning_back_into_the_body_is_a_self_collision() {
    let mut state = GameState::from_layout(
        ten_by_ten(),
        body(&[(5, 5), (5, 6), (5, 7)]),
        Direction::Up,
        Position::new(0, 0),
        42,
    )
    .expect("valid layout");

    assert_eq!(state.tick(), Step::Moved);
    assert_eq!(state.snake().head(), Position::new(5, 4));

    // The reversal guard keeps the game loop from ever attempting this move;
    // the rules still classify it as a self collision.
    let reversed = state.snake().advance(Direction::Down);
    assert_eq!(reversed, Position::new(5, 5));
    assert_eq!(
        rules::decide(state.grid(), state.snake(), reversed, state.food()),
        Decision::Collide(Collision::OwnBody)
    );

    state.set_pending_direction(Direction::Down);
    assert_eq!(state.tick(), Step::Moved);
    assert_eq!(state.snake().head(), Position::new(5, 3));
}

#[test]
fn reversal_keeps_heading_right() {
    let mut state = GameState::from_layout(
        ten_by_ten(),
        body(&[(4, 2), (3, 2), (2, 2)]),
        Direction::Right,
        Position::new(0, 9),
        42,
    )
    .expect("valid layout");

    state.set_pending_direction(Direction::Left);
    state.tick();

    assert_eq!(state.heading(), Direction::Right);
    assert_eq!(state.snake().head(), Position::new(5, 2));
}

#[test]
fn play_after_game_over_changes_nothing() {
    let grid = ten_by_ten();
    let state = GameState::from_layout(
        grid,
        body(&[(9, 0)]),
        Direction::Right,
        Position::new(0, 9),
        42,
    )
    .expect("valid layout");
    let mut engine = Engine::from_state(
        CellCanvas::new(grid, &THEME_CLASSIC),
        state,
        FramePacing::fixed(2),
    );

    let ended = engine.play();
    assert_eq!(
        ended.step,
        Some(Step::Ended(Outcome::Collision(Collision::Wall)))
    );
    let frozen = engine.snapshot();

    for _ in 0..50 {
        engine.control("ArrowDown");
        let report = engine.play();
        assert!(matches!(report.step, None | Some(Step::Idle)));
        assert_eq!(report.snapshot, frozen);
    }

    assert_eq!(engine.score(), 0);
    assert_eq!(engine.phase(), Phase::Over);
    assert_eq!(
        engine.surface().paint_at(Position::new(9, 0)),
        Some(Paint::SnakeHead)
    );
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let grid = Grid::new(1, 6).expect("valid grid");
    let state = GameState::from_layout(
        grid,
        body(&[(1, 1)]),
        Direction::Right,
        Position::new(2, 1),
        7,
    )
    .expect("valid layout");
    let mut engine = Engine::from_state(
        CellCanvas::new(grid, &THEME_CLASSIC),
        state,
        FramePacing::fixed(1),
    );

    assert_eq!(engine.play().step, Some(Step::Ate));
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.snapshot().snake.len(), 2);

    // The re-placed food may sit right above the head.
    engine.control("w");
    assert!(matches!(
        engine.play().step,
        Some(Step::Moved | Step::Ate)
    ));
    assert_eq!(engine.snapshot().snake[0], Position::new(2, 0));

    let last = engine.play();
    assert_eq!(
        last.step,
        Some(Step::Ended(Outcome::Collision(Collision::Wall)))
    );
    assert!(engine.is_over());
}
