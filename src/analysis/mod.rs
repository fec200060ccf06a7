//! Post-generation analysis of finished maps

/// Flood-fill reachability from the avatar start
pub mod connectivity;
/// Tile and layout summary figures
pub mod statistics;
