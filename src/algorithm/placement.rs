//! Rejection-sampled room placement
//!
//! Candidate rooms are drawn at random and kept only if they fit inside the
//! border margin without touching anything already placed. Placement stops
//! after a fixed number of rejections, so the final room count depends on the
//! seed rather than being fixed in advance.

use rand::Rng;

use crate::algorithm::executor::GeneratorConfig;
use crate::io::configuration::BORDER_MARGIN;
use crate::spatial::{Coordinate, Room, Tile, TileGrid};

/// Rooms accepted by a placement run
#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    /// Accepted rooms in placement order, floors filled
    pub rooms: Vec<Room>,
    /// Rejected candidates before the budget ran out
    pub retries: usize,
}

/// Place rooms until `config.max_retries` candidates have been rejected
///
/// Each attempt draws anchor x, anchor y, width and height in that order.
/// Accepted rooms get id equal to their index and have their floor filled
/// immediately, which also draws their opening point.
pub fn place_rooms<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    config: &GeneratorConfig,
    rng: &mut R,
) -> PlacementOutcome {
    let mut rooms: Vec<Room> = Vec::new();
    let mut retries = 0;

    let grid_width = config.width as i32;
    let grid_height = config.height as i32;
    let width_range = config.min_room_width..grid_width / 2;
    let height_range = config.min_room_height..grid_height / 2;

    // Nothing can be drawn from an empty range; validation normally rules this out
    if grid_width <= 0 || grid_height <= 0 || width_range.is_empty() || height_range.is_empty() {
        return PlacementOutcome { rooms, retries };
    }

    while retries < config.max_retries {
        let x = rng.random_range(0..grid_width);
        let y = rng.random_range(0..grid_height);
        let width = rng.random_range(width_range.clone());
        let height = rng.random_range(height_range.clone());

        let mut candidate = Room::new(Coordinate::new(x, y), rooms.len(), width, height);
        if is_valid_room(grid, &rooms, &candidate) {
            candidate.fill_floor(grid, rng);
            rooms.push(candidate);
        } else {
            retries += 1;
        }
    }

    PlacementOutcome { rooms, retries }
}

/// Whether a candidate fits inside the margin and overlaps nothing placed
pub fn is_valid_room(grid: &TileGrid, rooms: &[Room], candidate: &Room) -> bool {
    within_margin(grid, candidate)
        && !rooms.iter().any(|room| room.intersects(candidate))
        && candidate
            .footprint_cells()
            .all(|cell| grid.get(cell) == Some(Tile::Empty))
}

/// Whether the footprint keeps `BORDER_MARGIN` cells from every grid edge
pub fn within_margin(grid: &TileGrid, room: &Room) -> bool {
    let max_x = grid.width() as i32 - 1 - BORDER_MARGIN;
    let max_y = grid.height() as i32 - 1 - BORDER_MARGIN;

    room.left() >= BORDER_MARGIN
        && room.right() <= max_x
        && room.bottom() >= BORDER_MARGIN
        && room.top() <= max_y
}
