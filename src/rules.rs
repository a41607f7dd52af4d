use crate::grid::{Grid, Position};
use crate::snake::Snake;

/// What the head ran into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    OwnBody,
}

/// Verdict for one projected head move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Decision {
    Collide(Collision),
    Eat,
    Move,
}

/// Decides what happens when the head moves to `candidate`.
///
/// Collisions are checked before food, so a move that would both collide
/// and land on food is a collision.
#[must_use]
pub fn decide(grid: Grid, snake: &Snake, candidate: Position, food: Option<Position>) -> Decision {
    if !grid.contains(candidate) {
        return Decision::Collide(Collision::Wall);
    }

    if snake.hits_body(candidate) {
        return Decision::Collide(Collision::OwnBody);
    }

    if food == Some(candidate) {
        return Decision::Eat;
    }

    Decision::Move
}

#[cfg(test)]
mod tests {
    use super::{Collision, Decision, decide};
    use crate::grid::{Grid, Position};
    use crate::snake::Snake;

    fn grid() -> Grid {
        Grid::new(1, 10).expect("valid grid")
    }

    fn body(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(cells.iter().map(|&(x, y)| Position::new(x, y)).collect())
            .expect("non-empty body")
    }

    #[test]
    fn leaving_the_grid_hits_the_wall() {
        let snake = body(&[(0, 5)]);

        assert_eq!(
            decide(grid(), &snake, Position::new(-1, 5), None),
            Decision::Collide(Collision::Wall)
        );
        assert_eq!(
            decide(grid(), &snake, Position::new(0, 10), None),
            Decision::Collide(Collision::Wall)
        );
    }

    #[test]
    fn turning_into_the_neck_hits_own_body() {
        let snake = body(&[(5, 4), (5, 5), (5, 6)]);

        assert_eq!(
            decide(grid(), &snake, Position::new(5, 5), None),
            Decision::Collide(Collision::OwnBody)
        );
    }

    #[test]
    fn chasing_the_tail_is_allowed() {
        let snake = body(&[(2, 2), (3, 2), (3, 3), (2, 3)]);

        assert_eq!(
            decide(grid(), &snake, Position::new(2, 3), None),
            Decision::Move
        );
    }

    #[test]
    fn food_is_eaten_only_when_nothing_is_hit() {
        let snake = body(&[(5, 5)]);

        assert_eq!(
            decide(grid(), &snake, Position::new(6, 5), Some(Position::new(6, 5))),
            Decision::Eat
        );
        assert_eq!(
            decide(grid(), &snake, Position::new(6, 5), Some(Position::new(7, 5))),
            Decision::Move
        );
    }

    #[test]
    fn collision_wins_over_food() {
        let snake = body(&[(2, 2), (2, 3), (3, 3), (3, 2), (3, 1)]);

        // Food can never sit on the body in play; the ordering still holds.
        assert_eq!(
            decide(grid(), &snake, Position::new(3, 2), Some(Position::new(3, 2))),
            Decision::Collide(Collision::OwnBody)
        );
    }
}
