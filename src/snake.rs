use std::collections::{HashSet, VecDeque};

use crate::grid::Position;
use crate::input::Direction;

/// Ordered snake body, head at the front.
///
/// The body is only changed by [`Snake::grow`] and [`Snake::move_to`]; the
/// game loop decides which one to call after projecting the next head.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            body: VecDeque::from([start]),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Creates a straight snake of `length` cells with the head at `head`
    /// and the body trailing behind it, opposite to `heading`.
    #[must_use]
    pub fn straight(head: Position, heading: Direction, length: usize) -> Self {
        let step = heading.opposite().unit_vector();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut segment = head;

        for _ in 0..length.max(1) {
            body.push_back(segment);
            segment = segment.offset(step);
        }

        Self { body }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Projects the next head one step in `direction` without moving.
    #[must_use]
    pub fn advance(&self, direction: Direction) -> Position {
        self.head().offset(direction.unit_vector())
    }

    /// Prepends `new_head` and keeps the tail, growing by one.
    pub fn grow(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }

    /// Prepends `new_head` and drops the tail, so the body slides forward.
    pub fn move_to(&mut self, new_head: Position) {
        self.body.push_front(new_head);
        let _ = self.body.pop_back();
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if `candidate` lands on a segment that is still there
    /// after this tick's tail drop.
    #[must_use]
    pub fn hits_body(&self, candidate: Position) -> bool {
        let kept = self.body.len() - 1;
        self.body.iter().take(kept).any(|segment| *segment == candidate)
    }

    /// Returns every occupied cell.
    #[must_use]
    pub fn occupied(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Snake;
    use crate::grid::Position;
    use crate::input::Direction;

    #[test]
    fn straight_snake_trails_behind_heading() {
        let snake = Snake::straight(Position::new(10, 10), Direction::Left, 3);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(10, 10));
        assert_eq!(snake.tail(), Position::new(12, 10));
    }

    #[test]
    fn advance_is_a_pure_projection() {
        let snake = Snake::new(Position::new(5, 5));

        assert_eq!(snake.advance(Direction::Up), Position::new(5, 4));
        assert_eq!(snake.advance(Direction::Right), Position::new(6, 5));
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn move_to_slides_the_body() {
        let mut snake = Snake::straight(Position::new(10, 10), Direction::Left, 3);

        let next = snake.advance(Direction::Up);
        snake.move_to(next);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(10, 9));
        assert_eq!(snake.tail(), Position::new(11, 10));
    }

    #[test]
    fn grow_keeps_previous_tail() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.grow(Position::new(6, 5));

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.tail(), Position::new(5, 5));
    }

    #[test]
    fn hits_body_ignores_the_vacating_tail() {
        let snake = Snake::straight(Position::new(10, 10), Direction::Left, 3);

        assert!(!snake.hits_body(Position::new(12, 10)));
        assert!(snake.hits_body(Position::new(11, 10)));
        assert!(snake.hits_body(Position::new(10, 10)));
        assert!(!snake.hits_body(Position::new(9, 10)));
    }

    #[test]
    fn empty_segment_list_is_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
        assert!(Snake::from_segments(vec![Position::new(0, 0)]).is_some());
    }
}
