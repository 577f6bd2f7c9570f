//! Input events delivered to the core.
//!
//! The terminal collaborator translates whatever it reads into one
//! [`InputEvent`] per tick. Only the keys the game reacts to are modelled;
//! everything else (resize, mouse, unbound keys) arrives as
//! [`InputEvent::Other`].

use serde::{Deserialize, Serialize};

use crate::components::direction::Direction;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Cast the player's spell.
    Space,
}

impl Key {
    /// Facing selected by an arrow key; `None` for non-directional keys.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Right => Some(Direction::Right),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Space => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Key(Key),
    Other,
}

impl InputEvent {
    /// Parse one character of a key script.
    ///
    /// `w a s d` and `^ < v >` move, space casts, anything else is
    /// [`InputEvent::Other`].
    pub fn from_script_char(c: char) -> Self {
        match c {
            'w' | 'W' | '^' => InputEvent::Key(Key::Up),
            'a' | 'A' | '<' => InputEvent::Key(Key::Left),
            's' | 'S' | 'v' => InputEvent::Key(Key::Down),
            'd' | 'D' | '>' => InputEvent::Key(Key::Right),
            ' ' => InputEvent::Key(Key::Space),
            _ => InputEvent::Other,
        }
    }
}
