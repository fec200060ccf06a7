/// Avatar, obstacle and exit placement
pub mod decoration;
/// Union-find over room ids
pub mod disjoint_set;
/// Generation pipeline orchestration
pub mod executor;
/// Rejection-sampled room placement
pub mod placement;
/// Candidate corridors and spanning tree selection
pub mod selection;
