//! L-shaped corridors between room openings
//!
//! A corridor is one horizontal run and one vertical run meeting at an elbow.
//! When the two openings share a column or a row the corridor is straight and
//! one of the runs collapses to a single cell. Otherwise the elbow is one of the
//! two remaining corners of the openings' bounding rectangle, picked with a bit
//! from a stream seeded per corridor.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::{Tile, TileGrid};
use crate::spatial::room::Room;

/// Inclusive horizontal span on a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalRun {
    /// Row of the run
    pub y: i32,
    /// Leftmost column (inclusive)
    pub start_x: i32,
    /// Rightmost column (inclusive)
    pub end_x: i32,
}

impl HorizontalRun {
    fn between(y: i32, a: i32, b: i32) -> Self {
        Self {
            y,
            start_x: a.min(b),
            end_x: a.max(b),
        }
    }

    /// Left endpoint
    pub const fn start(&self) -> Coordinate {
        Coordinate::new(self.start_x, self.y)
    }

    /// Right endpoint
    pub const fn end(&self) -> Coordinate {
        Coordinate::new(self.end_x, self.y)
    }

    /// Number of steps from one end to the other
    pub const fn span(&self) -> u32 {
        self.start_x.abs_diff(self.end_x)
    }
}

/// Inclusive vertical span on a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalRun {
    /// Column of the run
    pub x: i32,
    /// Bottom row (inclusive)
    pub start_y: i32,
    /// Top row (inclusive)
    pub end_y: i32,
}

impl VerticalRun {
    fn between(x: i32, a: i32, b: i32) -> Self {
        Self {
            x,
            start_y: a.min(b),
            end_y: a.max(b),
        }
    }

    /// Bottom endpoint
    pub const fn start(&self) -> Coordinate {
        Coordinate::new(self.x, self.start_y)
    }

    /// Top endpoint
    pub const fn end(&self) -> Coordinate {
        Coordinate::new(self.x, self.end_y)
    }

    /// Number of steps from one end to the other
    pub const fn span(&self) -> u32 {
        self.start_y.abs_diff(self.end_y)
    }
}

/// Path between the openings of two rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corridor {
    room_one: usize,
    room_two: usize,
    elbow: Coordinate,
    horizontal: HorizontalRun,
    vertical: VerticalRun,
    length: u32,
}

impl Corridor {
    /// Build the corridor joining two filled rooms
    ///
    /// Draws exactly one value from `rng` to seed the corridor's own stream,
    /// whether or not the elbow turns out to be ambiguous. Returns `None` if
    /// either room has no opening point yet.
    pub fn new<R: Rng + ?Sized>(room_one: &Room, room_two: &Room, rng: &mut R) -> Option<Self> {
        let corridor_seed = rng.random::<u64>();
        let first = room_one.opening_point()?;
        let second = room_two.opening_point()?;
        let mut corridor_rng = StdRng::seed_from_u64(corridor_seed);

        let (elbow, horizontal, vertical) = if first.x() == second.x() {
            let elbow = Coordinate::new(first.x(), first.y().max(second.y()));
            (
                elbow,
                HorizontalRun::between(elbow.y(), elbow.x(), elbow.x()),
                VerticalRun::between(first.x(), first.y(), second.y()),
            )
        } else if first.y() == second.y() {
            let elbow = Coordinate::new(first.x().max(second.x()), first.y());
            (
                elbow,
                HorizontalRun::between(first.y(), first.x(), second.x()),
                VerticalRun::between(elbow.x(), elbow.y(), elbow.y()),
            )
        } else {
            // The vertical run follows whichever opening shares the elbow's column
            let (upright, level) = if corridor_rng.random_range(0..2) == 0 {
                (first, second)
            } else {
                (second, first)
            };
            let elbow = Coordinate::new(upright.x(), level.y());
            (
                elbow,
                HorizontalRun::between(level.y(), level.x(), elbow.x()),
                VerticalRun::between(upright.x(), upright.y(), elbow.y()),
            )
        };

        Some(Self {
            room_one: room_one.id(),
            room_two: room_two.id(),
            elbow,
            horizontal,
            vertical,
            length: horizontal.span() + vertical.span(),
        })
    }

    /// Id of the first room
    pub const fn room_one(&self) -> usize {
        self.room_one
    }

    /// Id of the second room
    pub const fn room_two(&self) -> usize {
        self.room_two
    }

    /// Where the corridor changes axis
    pub const fn elbow(&self) -> Coordinate {
        self.elbow
    }

    /// Horizontal segment
    pub const fn horizontal(&self) -> HorizontalRun {
        self.horizontal
    }

    /// Vertical segment
    pub const fn vertical(&self) -> VerticalRun {
        self.vertical
    }

    /// Horizontal span plus vertical span
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Whether the corridor touches the given room
    pub const fn connects(&self, room_id: usize) -> bool {
        self.room_one == room_id || self.room_two == room_id
    }

    /// Every floor cell of the corridor, horizontal run first
    ///
    /// The elbow is yielded by both runs.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let horizontal =
            (self.horizontal.start_x..=self.horizontal.end_x).map(|x| Coordinate::new(x, self.horizontal.y));
        let vertical =
            (self.vertical.start_y..=self.vertical.end_y).map(|y| Coordinate::new(self.vertical.x, y));
        horizontal.chain(vertical)
    }

    /// Draw the floor of both runs with write-if-empty
    pub fn draw_floor(&self, grid: &mut TileGrid) {
        let HorizontalRun { y, start_x, end_x } = self.horizontal;
        grid.fill_row_if_empty(y, start_x, end_x, Tile::Floor);

        let VerticalRun { x, start_y, end_y } = self.vertical;
        grid.fill_column_if_empty(x, start_y, end_y, Tile::Floor);
    }

    /// Draw the walls flanking both runs with write-if-empty
    ///
    /// The rows above and below the horizontal run extend one cell past each
    /// end so the elbow and dead ends are closed off.
    pub fn draw_walls(&self, grid: &mut TileGrid) {
        let HorizontalRun { y, start_x, end_x } = self.horizontal;
        grid.fill_row_if_empty(y + 1, start_x - 1, end_x + 1, Tile::Wall);
        grid.fill_row_if_empty(y - 1, start_x - 1, end_x + 1, Tile::Wall);

        let VerticalRun { x, start_y, end_y } = self.vertical;
        grid.fill_column_if_empty(x - 1, start_y, end_y, Tile::Wall);
        grid.fill_column_if_empty(x + 1, start_y, end_y, Tile::Wall);
    }
}
