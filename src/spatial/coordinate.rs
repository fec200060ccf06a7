//! Integer grid positions with directional offsets
//!
//! The map uses a y-up convention: `up` increases `y`, `down` decreases it.

use std::fmt;

/// A position on the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Create a coordinate at `(x, y)`
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Shift this coordinate left by `delta`
    pub const fn move_left(&mut self, delta: i32) {
        self.x -= delta;
    }

    /// Shift this coordinate right by `delta`
    pub const fn move_right(&mut self, delta: i32) {
        self.x += delta;
    }

    /// Shift this coordinate up by `delta`
    pub const fn move_up(&mut self, delta: i32) {
        self.y += delta;
    }

    /// Shift this coordinate down by `delta`
    pub const fn move_down(&mut self, delta: i32) {
        self.y -= delta;
    }

    /// New coordinate `delta` cells to the left
    #[must_use]
    pub const fn left(&self, delta: i32) -> Self {
        Self::new(self.x - delta, self.y)
    }

    /// New coordinate `delta` cells to the right
    #[must_use]
    pub const fn right(&self, delta: i32) -> Self {
        Self::new(self.x + delta, self.y)
    }

    /// New coordinate `delta` cells up
    #[must_use]
    pub const fn up(&self, delta: i32) -> Self {
        Self::new(self.x, self.y + delta)
    }

    /// New coordinate `delta` cells down
    #[must_use]
    pub const fn down(&self, delta: i32) -> Self {
        Self::new(self.x, self.y - delta)
    }

    /// Manhattan distance to another coordinate
    pub const fn manhattan_distance(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbours (left, right, up, down)
    pub const fn neighbors(&self) -> [Self; 4] {
        [self.left(1), self.right(1), self.up(1), self.down(1)]
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
