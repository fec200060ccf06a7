//! Summary figures for a generated map

use std::fmt;

use crate::algorithm::executor::DungeonMap;
use crate::spatial::{Corridor, Tile};

/// Tile and layout counts for a single map
#[derive(Debug, Clone, PartialEq)]
pub struct MapStatistics {
    /// Seed the map came from
    pub seed: u64,
    /// Cell count per tile variant, in [`Tile::ALL`] order
    pub tile_counts: [usize; 6],
    /// Number of rooms
    pub room_count: usize,
    /// Number of accepted corridors
    pub corridor_count: usize,
    /// Sum of accepted corridor lengths
    pub total_corridor_length: u32,
    /// Share of cells that are walkable
    pub walkable_ratio: f64,
}

impl MapStatistics {
    /// Count everything in a finished map
    pub fn collect(map: &DungeonMap) -> Self {
        let grid = map.grid();
        let tile_counts = Tile::ALL.map(|tile| grid.count(tile));

        let cell_count = grid.width() * grid.height();
        let walkable: usize = Tile::ALL
            .iter()
            .zip(tile_counts)
            .filter(|(tile, _)| tile.is_passable())
            .map(|(_, count)| count)
            .sum();
        let walkable_ratio = if cell_count == 0 {
            0.0
        } else {
            walkable as f64 / cell_count as f64
        };

        Self {
            seed: map.seed(),
            tile_counts,
            room_count: map.room_count(),
            corridor_count: map.corridors().len(),
            total_corridor_length: map.corridors().iter().map(Corridor::length).sum(),
            walkable_ratio,
        }
    }

    /// Cells holding `tile`
    pub fn count_of(&self, tile: Tile) -> usize {
        Tile::ALL
            .iter()
            .position(|&candidate| candidate == tile)
            .and_then(|index| self.tile_counts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Mean accepted corridor length
    pub fn mean_corridor_length(&self) -> f64 {
        if self.corridor_count == 0 {
            0.0
        } else {
            f64::from(self.total_corridor_length) / self.corridor_count as f64
        }
    }
}

impl fmt::Display for MapStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed {}: {} rooms, {} corridors (total length {}), {:.1}% walkable",
            self.seed,
            self.room_count,
            self.corridor_count,
            self.total_corridor_length,
            self.walkable_ratio * 100.0
        )
    }
}
