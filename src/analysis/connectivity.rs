//! Flood-fill reachability over passable tiles

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::algorithm::executor::DungeonMap;
use crate::spatial::{Coordinate, TileGrid};

/// Cells reachable from an origin by orthogonal steps over passable tiles
///
/// One bit per grid cell, indexed by [`TileGrid::linear_index`].
#[derive(Clone, Debug)]
pub struct ReachabilityMap {
    visited: BitVec,
    width: usize,
    height: usize,
}

impl ReachabilityMap {
    /// Flood outward from `origin`
    ///
    /// An origin off the grid or on an impassable tile reaches nothing.
    pub fn flood_from(grid: &TileGrid, origin: Coordinate) -> Self {
        let mut visited = bitvec![0; grid.width() * grid.height()];
        let mut frontier = VecDeque::new();

        if let Some(index) = passable_index(grid, origin) {
            visited.set(index, true);
            frontier.push_back(origin);
        }

        while let Some(current) = frontier.pop_front() {
            for neighbor in current.neighbors() {
                let Some(index) = passable_index(grid, neighbor) else {
                    continue;
                };
                if visited.get(index).as_deref() == Some(&false) {
                    visited.set(index, true);
                    frontier.push_back(neighbor);
                }
            }
        }

        Self {
            visited,
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Flood a finished map from its avatar start
    pub fn from_start(map: &DungeonMap) -> Self {
        Self::flood_from(map.grid(), map.start_position())
    }

    /// Whether a cell was reached
    pub fn is_reachable(&self, at: Coordinate) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(at.x()), usize::try_from(at.y())) else {
            return false;
        };
        if x >= self.width || y >= self.height {
            return false;
        }
        self.visited.get(x * self.height + y).as_deref() == Some(&true)
    }

    /// Number of reached cells
    pub fn reached_count(&self) -> usize {
        self.visited.count_ones()
    }

    /// Whether every coordinate in the set was reached
    pub fn reaches_all<'a>(&self, targets: impl IntoIterator<Item = &'a Coordinate>) -> bool {
        targets.into_iter().all(|&target| self.is_reachable(target))
    }
}

/// Whether every exit and room opening can be walked to from the start
pub fn is_fully_connected(map: &DungeonMap) -> bool {
    let reachability = ReachabilityMap::from_start(map);
    let openings: Vec<Coordinate> = map
        .rooms()
        .iter()
        .filter_map(|room| room.opening_point())
        .collect();

    reachability.reaches_all(map.exits()) && reachability.reaches_all(&openings)
}

fn passable_index(grid: &TileGrid, at: Coordinate) -> Option<usize> {
    grid.get(at)
        .filter(|tile| tile.is_passable())
        .and_then(|_| grid.linear_index(at))
}
