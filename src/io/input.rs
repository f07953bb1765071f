//! Translation of raw key state into game commands
//!
//! Keys are sampled as a set of currently pressed keys. Once an action fires,
//! further actions are ignored until every key has been released, so holding
//! a key never plays more than one turn.

use crate::board::direction::Direction;

/// Physical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Escape, quits the game
    Escape,
    /// `S`, saves a screenshot
    S,
}

impl Key {
    /// Parse a terminal token into a key
    ///
    /// Accepts arrow names, vi-style `h`/`j`/`k`/`l`, ANSI arrow escape
    /// sequences, `q`/`esc` for escape and `s` for screenshots.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "left" | "h" | "\u{1b}[d" => Some(Self::Left),
            "right" | "l" | "\u{1b}[c" => Some(Self::Right),
            "up" | "k" | "\u{1b}[a" => Some(Self::Up),
            "down" | "j" | "\u{1b}[b" => Some(Self::Down),
            "q" | "quit" | "esc" | "escape" | "\u{1b}" => Some(Self::Escape),
            "s" | "screenshot" => Some(Self::S),
            _ => None,
        }
    }

    /// Direction bound to the key, if it is an arrow
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Escape | Self::S => None,
        }
    }
}

/// What the engine should do after a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a turn in the given direction
    Move(Direction),
    /// Save a screenshot of the grid
    Screenshot,
    /// Leave the game
    Quit,
    /// Nothing to do
    Idle,
}

/// Key latch turning held keys into single commands
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    latched: bool,
}

impl InputState {
    /// Create an unlatched input state
    pub const fn new() -> Self {
        Self { latched: false }
    }

    /// Whether an action fired and keys have not been released since
    pub const fn is_latched(&self) -> bool {
        self.latched
    }

    /// Turn the currently pressed keys into a command
    ///
    /// Escape always quits. Otherwise a move wins over a screenshot, and when
    /// several arrows are held the last one of left, right, up, down applies.
    pub fn poll(&mut self, pressed: &[Key]) -> Command {
        if pressed.is_empty() {
            self.latched = false;
            return Command::Idle;
        }

        if pressed.contains(&Key::Escape) {
            self.latched = true;
            return Command::Quit;
        }

        if self.latched {
            return Command::Idle;
        }

        let direction = [Key::Left, Key::Right, Key::Up, Key::Down]
            .into_iter()
            .rev()
            .filter(|key| pressed.contains(key))
            .find_map(Key::direction);

        if let Some(direction) = direction {
            self.latched = true;
            return Command::Move(direction);
        }

        if pressed.contains(&Key::S) {
            self.latched = true;
            return Command::Screenshot;
        }

        Command::Idle
    }
}
