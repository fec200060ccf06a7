//! Deterministic dungeon map generation from an integer seed
//!
//! Rooms are placed by rejection sampling, joined by a minimum spanning tree of
//! L-shaped corridors, walled in, and decorated with an avatar start, obstacles
//! and two exits. The same seed and dimensions always yield the same map.

#![forbid(unsafe_code)]

/// Generation pipeline: placement, corridor selection and decoration
pub mod algorithm;
/// Reachability and summary statistics for finished maps
pub mod analysis;
/// Configuration, errors, exports and the command line
pub mod io;
/// Coordinates, tile grid, rooms and corridors
pub mod spatial;

pub use algorithm::executor::{DungeonMap, GeneratorConfig, MapGenerator, generate};
pub use io::error::{GenerationError, Result};
pub use spatial::{Coordinate, Tile, TileGrid};
