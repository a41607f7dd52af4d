use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the one-cell step for this direction (y grows downwards).
    #[must_use]
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Maps a key identifier to a direction.
    ///
    /// Accepts the browser-style arrow names and WASD in either case.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Self::Up),
            "ArrowDown" | "s" | "S" => Some(Self::Down),
            "ArrowLeft" | "a" | "A" => Some(Self::Left),
            "ArrowRight" | "d" | "D" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Commands the terminal host acts on.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum HostCommand {
    /// Raw key identifier forwarded to the engine's `control`.
    Key(String),
    Pause,
    Restart,
    Quit,
}

/// Translates a crossterm key event into a host command.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<HostCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(HostCommand::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(HostCommand::Quit),
        KeyCode::Char('p' | 'P') => Some(HostCommand::Pause),
        KeyCode::Char(' ') | KeyCode::Enter => Some(HostCommand::Restart),
        KeyCode::Up => Some(HostCommand::Key("ArrowUp".to_owned())),
        KeyCode::Down => Some(HostCommand::Key("ArrowDown".to_owned())),
        KeyCode::Left => Some(HostCommand::Key("ArrowLeft".to_owned())),
        KeyCode::Right => Some(HostCommand::Key("ArrowRight".to_owned())),
        KeyCode::Char(c) => Some(HostCommand::Key(c.to_string())),
        _ => None,
    }
}

/// Polls crossterm for the next host command, waiting at most `timeout`.
pub fn poll_command(timeout: Duration) -> io::Result<Option<HostCommand>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(command_for_key(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{Direction, HostCommand, command_for_key, direction_change_is_valid};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrow_and_wasd_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("s"), Some(Direction::Down));
        assert_eq!(Direction::from_key("A"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("x"), None);
        assert_eq!(Direction::from_key(""), None);
    }

    #[test]
    fn crossterm_keys_become_host_commands() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            command_for_key(press(KeyCode::Left)),
            Some(HostCommand::Key("ArrowLeft".to_owned()))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('w'))),
            Some(HostCommand::Key("w".to_owned()))
        );
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(HostCommand::Quit));
        assert_eq!(
            command_for_key(press(KeyCode::Char('p'))),
            Some(HostCommand::Pause)
        );
        assert_eq!(
            command_for_key(press(KeyCode::Enter)),
            Some(HostCommand::Restart)
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(HostCommand::Quit)
        );
        assert_eq!(command_for_key(press(KeyCode::F(5))), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(command_for_key(release), None);
    }
}
