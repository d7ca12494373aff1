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

    /// Returns the `(dx, dy)` step for one cell of movement. Y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// High-level input events consumed by the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Pause,
    Stop,
    Quit,
    NameChar(char),
    NameBackspace,
}

/// Which key map applies right now.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputMode {
    /// The start screen owns the keyboard for typing a player name.
    NameEntry,
    /// A game is running or paused.
    Playing,
}

/// Translates one terminal key event into a game input.
#[must_use]
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match mode {
        InputMode::NameEntry => match key.code {
            KeyCode::Enter => Some(GameInput::Confirm),
            KeyCode::Backspace => Some(GameInput::NameBackspace),
            KeyCode::Esc => Some(GameInput::Quit),
            KeyCode::Char(c) if !c.is_control() => Some(GameInput::NameChar(c)),
            _ => None,
        },
        InputMode::Playing => match key.code {
            KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
            KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
            KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
            KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
            KeyCode::Enter => Some(GameInput::Confirm),
            KeyCode::Esc => Some(GameInput::Stop),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Some(GameInput::Direction(Direction::Up)),
                's' => Some(GameInput::Direction(Direction::Down)),
                'a' => Some(GameInput::Direction(Direction::Left)),
                'd' => Some(GameInput::Direction(Direction::Right)),
                'p' => Some(GameInput::Pause),
                'q' => Some(GameInput::Quit),
                _ => None,
            },
            _ => None,
        },
    }
}

/// Reads terminal events and maps them to game inputs.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one key event.
    pub fn poll_input(
        &mut self,
        timeout: Duration,
        mode: InputMode,
    ) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key, mode)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{direction_change_is_valid, map_key, Direction, GameInput, InputMode};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_not_a_valid_change() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Left, Direction::Right));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrows_and_wasd_map_to_the_same_directions() {
        let pairs = [
            (KeyCode::Up, 'w', Direction::Up),
            (KeyCode::Down, 's', Direction::Down),
            (KeyCode::Left, 'a', Direction::Left),
            (KeyCode::Right, 'd', Direction::Right),
        ];

        for (arrow, letter, direction) in pairs {
            let expected = Some(GameInput::Direction(direction));
            assert_eq!(map_key(press(arrow), InputMode::Playing), expected);
            assert_eq!(map_key(press(KeyCode::Char(letter)), InputMode::Playing), expected);
            assert_eq!(
                map_key(press(KeyCode::Char(letter.to_ascii_uppercase())), InputMode::Playing),
                expected
            );
        }
    }

    #[test]
    fn name_entry_captures_letters_instead_of_moving() {
        assert_eq!(
            map_key(press(KeyCode::Char('w')), InputMode::NameEntry),
            Some(GameInput::NameChar('w'))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), InputMode::NameEntry),
            Some(GameInput::NameBackspace)
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), InputMode::NameEntry),
            Some(GameInput::Confirm)
        );
        assert_eq!(map_key(press(KeyCode::Up), InputMode::NameEntry), None);
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(map_key(key, InputMode::NameEntry), Some(GameInput::Quit));
        assert_eq!(map_key(key, InputMode::Playing), Some(GameInput::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(map_key(key, InputMode::Playing), None);
    }
}
