//! Rectangular rooms with a wall ring and a single corridor anchor
//!
//! A room is described by its upper-left corner and its outer dimensions. The
//! outermost ring of the rectangle is reserved for walls; everything inside it
//! is floor. One interior cell is chosen as the opening point, and every
//! corridor touching the room starts or ends there.

use rand::Rng;

use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::{Tile, TileGrid};

/// Axis-aligned room placed on the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: usize,
    width: i32,
    height: i32,
    upper_left: Coordinate,
    upper_right: Coordinate,
    bottom_left: Coordinate,
    bottom_right: Coordinate,
    opening: Option<Coordinate>,
}

impl Room {
    /// Create a room from its upper-left corner, id and outer dimensions
    ///
    /// Dimensions are not validated here; the generator only builds rooms
    /// from its configured minimum sizes upward.
    pub const fn new(upper_left: Coordinate, id: usize, width: i32, height: i32) -> Self {
        let upper_right = upper_left.right(width - 1);
        let bottom_left = upper_left.down(height - 1);
        let bottom_right = bottom_left.right(width - 1);

        Self {
            id,
            width,
            height,
            upper_left,
            upper_right,
            bottom_left,
            bottom_right,
            opening: None,
        }
    }

    /// Index of this room in placement order
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Outer width including walls
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Outer height including walls
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Upper-left corner of the wall ring
    pub const fn upper_left(&self) -> Coordinate {
        self.upper_left
    }

    /// Upper-right corner of the wall ring
    pub const fn upper_right(&self) -> Coordinate {
        self.upper_right
    }

    /// Bottom-left corner of the wall ring
    pub const fn bottom_left(&self) -> Coordinate {
        self.bottom_left
    }

    /// Bottom-right corner of the wall ring
    pub const fn bottom_right(&self) -> Coordinate {
        self.bottom_right
    }

    /// Corridor anchor, assigned by [`Room::fill_floor`]
    pub const fn opening_point(&self) -> Option<Coordinate> {
        self.opening
    }

    /// Leftmost column of the footprint
    pub const fn left(&self) -> i32 {
        self.upper_left.x()
    }

    /// Rightmost column of the footprint
    pub const fn right(&self) -> i32 {
        self.upper_right.x()
    }

    /// Topmost row of the footprint
    pub const fn top(&self) -> i32 {
        self.upper_left.y()
    }

    /// Bottom row of the footprint
    pub const fn bottom(&self) -> i32 {
        self.bottom_left.y()
    }

    /// Whether the coordinate lies anywhere on the footprint, walls included
    pub const fn contains(&self, at: Coordinate) -> bool {
        at.x() >= self.left()
            && at.x() <= self.right()
            && at.y() >= self.bottom()
            && at.y() <= self.top()
    }

    /// Whether the coordinate lies strictly inside the wall ring
    pub const fn contains_interior(&self, at: Coordinate) -> bool {
        at.x() > self.left() && at.x() < self.right() && at.y() > self.bottom() && at.y() < self.top()
    }

    /// Whether two footprints share at least one cell
    pub const fn intersects(&self, other: &Self) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.bottom() <= other.top()
            && other.bottom() <= self.top()
    }

    /// Every cell of the footprint, bottom row first
    pub fn footprint_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (self.bottom()..=self.top())
            .flat_map(move |y| (self.left()..=self.right()).map(move |x| Coordinate::new(x, y)))
    }

    /// Every interior (floor) cell, bottom row first
    pub fn interior_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (self.bottom() + 1..self.top())
            .flat_map(move |y| (self.left() + 1..self.right()).map(move |x| Coordinate::new(x, y)))
    }

    /// Draw the floor and choose the opening point
    ///
    /// Floor is written bottom row to top row with write-if-empty. The opening
    /// point is then drawn uniformly from the interior, x before y. A room
    /// that already has an opening keeps it, and no random draw is made.
    pub fn fill_floor<R: Rng + ?Sized>(&mut self, grid: &mut TileGrid, rng: &mut R) {
        for y in self.bottom() + 1..self.top() {
            grid.fill_row_if_empty(y, self.left() + 1, self.right() - 1, Tile::Floor);
        }

        if self.opening.is_none() {
            self.opening = self.random_interior_point(rng);
        }
    }

    /// Draw the wall ring with write-if-empty
    pub fn draw_walls(&self, grid: &mut TileGrid) {
        grid.fill_row_if_empty(self.top(), self.left(), self.right(), Tile::Wall);
        grid.fill_row_if_empty(self.bottom(), self.left(), self.right(), Tile::Wall);
        grid.fill_column_if_empty(self.left(), self.bottom(), self.top(), Tile::Wall);
        grid.fill_column_if_empty(self.right(), self.bottom(), self.top(), Tile::Wall);
    }

    /// Uniform interior cell, x drawn before y
    ///
    /// Returns `None` for rooms too thin to have an interior.
    pub fn random_interior_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        let x_range = self.left() + 1..self.right();
        let y_range = self.bottom() + 1..self.top();
        if x_range.is_empty() || y_range.is_empty() {
            return None;
        }

        let x = rng.random_range(x_range);
        let y = rng.random_range(y_range);
        Some(Coordinate::new(x, y))
    }
}
