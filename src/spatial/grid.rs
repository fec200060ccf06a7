//! Tile grid storage and the write-if-empty overlay rule
//!
//! Every drawing pass (room floors, corridor floors, room walls, corridor walls)
//! goes through [`TileGrid::write_if_empty`], so a cell written by an earlier
//! pass is never replaced by a later one. Only decoration uses [`TileGrid::set`].

use std::fmt;

use ndarray::Array2;

use crate::spatial::coordinate::Coordinate;

/// Contents of a single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Untouched cell outside every room and corridor
    #[default]
    Empty,
    /// Walkable room or corridor floor
    Floor,
    /// Room or corridor boundary
    Wall,
    /// One of the two exits out of the level
    UnlockedExit,
    /// Decorative obstacle placed on a room's opening point
    Obstacle,
    /// Starting position of the player
    Avatar,
}

impl Tile {
    /// All tile variants in declaration order
    pub const ALL: [Self; 6] = [
        Self::Empty,
        Self::Floor,
        Self::Wall,
        Self::UnlockedExit,
        Self::Obstacle,
        Self::Avatar,
    ];

    /// Single-character representation used by the text export
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Floor => '.',
            Self::Wall => '#',
            Self::UnlockedExit => 'D',
            Self::Obstacle => '♠',
            Self::Avatar => '@',
        }
    }

    /// RGBA colour used by the image export
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Empty => [0, 0, 0, 255],
            Self::Floor => [128, 192, 128, 255],
            Self::Wall => [128, 64, 32, 255],
            Self::UnlockedExit => [218, 165, 32, 255],
            Self::Obstacle => [0, 128, 0, 255],
            Self::Avatar => [255, 255, 255, 255],
        }
    }

    /// Whether a walker can stand on this tile
    pub const fn is_passable(self) -> bool {
        matches!(
            self,
            Self::Floor | Self::UnlockedExit | Self::Obstacle | Self::Avatar
        )
    }
}

/// Fixed-size map of tiles indexed by `[x, y]` with `y` growing upward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Array2<Tile>,
}

impl TileGrid {
    /// Create a grid with every cell set to [`Tile::Empty`]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: Array2::from_elem((width, height), Tile::Empty),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.dim().1
    }

    /// Whether the coordinate lies on the grid
    pub fn contains(&self, at: Coordinate) -> bool {
        self.index_of(at).is_some()
    }

    /// Whether the coordinate lies on the outermost ring of cells
    pub fn is_border(&self, at: Coordinate) -> bool {
        self.index_of(at).is_some_and(|[x, y]| {
            x == 0 || y == 0 || x + 1 == self.width() || y + 1 == self.height()
        })
    }

    /// Tile at a coordinate, or `None` when off the grid
    pub fn get(&self, at: Coordinate) -> Option<Tile> {
        self.index_of(at)
            .and_then(|index| self.tiles.get(index))
            .copied()
    }

    /// Overwrite a cell unconditionally
    ///
    /// Returns `false` when the coordinate is off the grid.
    pub fn set(&mut self, at: Coordinate, tile: Tile) -> bool {
        match self.index_of(at).and_then(|index| self.tiles.get_mut(index)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Write a tile only if the cell is currently [`Tile::Empty`]
    ///
    /// Returns whether the cell was written. Off-grid coordinates are ignored.
    pub fn write_if_empty(&mut self, at: Coordinate, tile: Tile) -> bool {
        match self.index_of(at).and_then(|index| self.tiles.get_mut(index)) {
            Some(cell) if *cell == Tile::Empty => {
                *cell = tile;
                true
            }
            _ => false,
        }
    }

    /// Write-if-empty along row `y` from `start_x` to `end_x` inclusive
    pub fn fill_row_if_empty(&mut self, y: i32, start_x: i32, end_x: i32, tile: Tile) {
        for x in start_x..=end_x {
            self.write_if_empty(Coordinate::new(x, y), tile);
        }
    }

    /// Write-if-empty along column `x` from `start_y` to `end_y` inclusive
    pub fn fill_column_if_empty(&mut self, x: i32, start_y: i32, end_y: i32, tile: Tile) {
        for y in start_y..=end_y {
            self.write_if_empty(Coordinate::new(x, y), tile);
        }
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&cell| cell == tile).count()
    }

    /// Coordinates of every cell holding `tile`, column by column
    pub fn positions_of(&self, tile: Tile) -> Vec<Coordinate> {
        self.tiles
            .indexed_iter()
            .filter(|&(_, &cell)| cell == tile)
            .map(|((x, y), _)| Coordinate::new(x as i32, y as i32))
            .collect()
    }

    /// Iterate over every cell with its coordinate
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((x, y), &tile)| (Coordinate::new(x as i32, y as i32), tile))
    }

    /// Linear cell index (column-major), used by bitset-backed analyses
    pub fn linear_index(&self, at: Coordinate) -> Option<usize> {
        self.index_of(at).map(|[x, y]| x * self.height() + y)
    }

    fn index_of(&self, at: Coordinate) -> Option<[usize; 2]> {
        let x = usize::try_from(at.x()).ok()?;
        let y = usize::try_from(at.y()).ok()?;
        (x < self.width() && y < self.height()).then_some([x, y])
    }
}

impl fmt::Display for TileGrid {
    /// Glyph rows from the top of the map down, each terminated by a newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let tile = self.tiles.get([x, y]).copied().unwrap_or_default();
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
