//! Spatial building blocks of a dungeon map
//!
//! This module contains the geometry the generator works with:
//! - Grid coordinates and the tile grid itself
//! - Rooms with floors, walls and opening points
//! - Corridors joining room openings

/// Integer coordinates with directional helpers
pub mod coordinate;
/// L-shaped corridors between rooms
pub mod corridor;
/// Tile storage and the write-if-empty overlay rule
pub mod grid;
/// Rectangular rooms
pub mod room;

pub use coordinate::Coordinate;
pub use corridor::Corridor;
pub use grid::{Tile, TileGrid};
pub use room::Room;
