//! Move directions, index stepping and traversal ordering
//!
//! Coordinates follow the screen convention used throughout the crate: `x` is
//! the column (growing to the right) and `y` is the row (growing downwards).

use std::fmt;

/// One of the four directions a turn can slide the tiles in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
}

impl Direction {
    /// All directions in the order the game-over probe tries them
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Whether the direction moves tiles along a row (changes `x`)
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether tiles travel towards increasing coordinates
    const fn is_forward(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

/// Position of a cell inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl TileIndex {
    /// Build an index from its column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring index one step in `direction`
    ///
    /// Returns `None` when the index already sits on the edge the direction
    /// faces, which makes a step a no-op there.
    pub const fn step(self, direction: Direction, size: usize) -> Option<Self> {
        match direction {
            Direction::Left if self.x > 0 => Some(Self::new(self.x - 1, self.y)),
            Direction::Right if self.x + 1 < size => Some(Self::new(self.x + 1, self.y)),
            Direction::Up if self.y > 0 => Some(Self::new(self.x, self.y - 1)),
            Direction::Down if self.y + 1 < size => Some(Self::new(self.x, self.y + 1)),
            _ => None,
        }
    }

    /// Array position used by `ndarray` (`[x, y]` storage order)
    pub const fn as_array_index(self) -> (usize, usize) {
        (self.x, self.y)
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Every index of a `size` x `size` grid, nearest the `direction` edge first
///
/// Processing tiles in this order guarantees a tile is resolved only after
/// every tile ahead of it in the direction of travel, so tiles never block
/// each other spuriously and merges happen pairwise.
pub fn traversal_order(size: usize, direction: Direction) -> Vec<TileIndex> {
    let lanes: Vec<usize> = if direction.is_forward() {
        (0..size).rev().collect()
    } else {
        (0..size).collect()
    };

    let mut order = Vec::with_capacity(size * size);
    for &lane in &lanes {
        for across in 0..size {
            let index = if direction.is_horizontal() {
                TileIndex::new(lane, across)
            } else {
                TileIndex::new(across, lane)
            };
            order.push(index);
        }
    }
    order
}
