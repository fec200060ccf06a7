//! Avatar, obstacle and exit placement on a finished layout

use rand::Rng;

use crate::spatial::{Coordinate, Corridor, Room, Tile, TileGrid};

/// Positions written by the decoration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorations {
    /// Avatar starting position
    pub start: Coordinate,
    /// Obstacle positions in room order
    pub obstacles: Vec<Coordinate>,
    /// Exit positions in placement order
    pub exits: Vec<Coordinate>,
}

/// Decorate a walled layout
///
/// Draw order is fixed: one draw for the avatar corridor, then room, x and y
/// for every exit attempt. Returns `None` if there is no accepted
/// corridor to start from or too few free interior cells for the exits.
pub fn decorate<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    rooms: &[Room],
    corridors: &[Corridor],
    exit_count: usize,
    rng: &mut R,
) -> Option<Decorations> {
    let start = place_avatar(grid, rooms, corridors, rng)?;
    let obstacles = place_obstacles(grid, rooms, start);
    let exits = place_exits(grid, rooms, exit_count, rng)?;

    Some(Decorations {
        start,
        obstacles,
        exits,
    })
}

/// Put the avatar on the first room opening of a random accepted corridor
pub fn place_avatar<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    rooms: &[Room],
    corridors: &[Corridor],
    rng: &mut R,
) -> Option<Coordinate> {
    if corridors.is_empty() {
        return None;
    }

    let corridor = corridors.get(rng.random_range(0..corridors.len()))?;
    let start = rooms.get(corridor.room_one())?.opening_point()?;
    grid.set(start, Tile::Avatar);
    Some(start)
}

/// Put an obstacle on every room opening except the avatar's
pub fn place_obstacles(grid: &mut TileGrid, rooms: &[Room], start: Coordinate) -> Vec<Coordinate> {
    let mut obstacles = Vec::with_capacity(rooms.len().saturating_sub(1));
    for opening in rooms.iter().filter_map(Room::opening_point) {
        if opening != start {
            grid.set(opening, Tile::Obstacle);
            obstacles.push(opening);
        }
    }
    obstacles
}

/// Put `count` exits on random floor cells inside random rooms
///
/// A pick is kept only when the cell is still plain floor, which rules out
/// the avatar, obstacles and earlier exits. Returns `None` when the rooms do
/// not have enough such cells between them.
pub fn place_exits<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    rooms: &[Room],
    count: usize,
    rng: &mut R,
) -> Option<Vec<Coordinate>> {
    let available = rooms
        .iter()
        .flat_map(Room::interior_cells)
        .filter(|&cell| grid.get(cell) == Some(Tile::Floor))
        .count();
    if available < count || (count > 0 && rooms.is_empty()) {
        return None;
    }

    let mut exits = Vec::with_capacity(count);
    while exits.len() < count {
        let Some(room) = rooms.get(rng.random_range(0..rooms.len())) else {
            continue;
        };
        let Some(cell) = room.random_interior_point(rng) else {
            continue;
        };

        if grid.get(cell) == Some(Tile::Floor) {
            grid.set(cell, Tile::UnlockedExit);
            exits.push(cell);
        }
    }

    Some(exits)
}
