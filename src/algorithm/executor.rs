use rand::{SeedableRng, rngs::StdRng};

use crate::{
    algorithm::decoration::{Decorations, decorate},
    algorithm::placement::place_rooms,
    algorithm::selection::{build_candidates, select_spanning_corridors},
    io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_MAX_RETRIES, DEFAULT_SEED, DEFAULT_WIDTH, EXIT_COUNT,
        MAX_GRID_DIMENSION, MIN_ROOM_HEIGHT, MIN_ROOM_SIDE_LIMIT, MIN_ROOM_WIDTH,
    },
    io::error::{GenerationError, Result, invalid_parameter},
    spatial::{Coordinate, Corridor, Room, TileGrid},
};

/// Generator parameters controlling grid size, seed and room sampling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Seed of the single random stream
    pub seed: u64,
    /// Rejected room candidates before placement stops
    pub max_retries: usize,
    /// Smallest outer room width
    pub min_room_width: i32,
    /// Smallest outer room height
    pub min_room_height: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_SEED)
    }
}

impl GeneratorConfig {
    /// Create a configuration with default retry budget and room minimums
    pub const fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            max_retries: DEFAULT_MAX_RETRIES,
            min_room_width: MIN_ROOM_WIDTH,
            min_room_height: MIN_ROOM_HEIGHT,
        }
    }

    /// Replace the seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the placement retry budget
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Replace the minimum room dimensions
    #[must_use]
    pub const fn with_min_room_size(mut self, width: i32, height: i32) -> Self {
        self.min_room_width = width;
        self.min_room_height = height;
        self
    }

    /// Smallest grid `(width, height)` whose room size range is non-empty
    ///
    /// Room sides are drawn from `min..grid / 2`, so each grid side must be
    /// at least twice the minimum plus two.
    pub const fn minimum_dimensions(&self) -> (usize, usize) {
        (
            2 * self.min_room_width.unsigned_abs() as usize + 2,
            2 * self.min_room_height.unsigned_abs() as usize + 2,
        )
    }

    /// Check the configuration before any drawing happens
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A minimum room side is too small to hold a floor cell
    /// - The retry budget is zero
    /// - The grid is smaller than [`Self::minimum_dimensions`] or larger than
    ///   `MAX_GRID_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        if self.min_room_width < MIN_ROOM_SIDE_LIMIT {
            return Err(invalid_parameter(
                "min_room_width",
                &self.min_room_width,
                &format!("must be at least {MIN_ROOM_SIDE_LIMIT}"),
            ));
        }
        if self.min_room_height < MIN_ROOM_SIDE_LIMIT {
            return Err(invalid_parameter(
                "min_room_height",
                &self.min_room_height,
                &format!("must be at least {MIN_ROOM_SIDE_LIMIT}"),
            ));
        }
        if self.max_retries == 0 {
            return Err(invalid_parameter(
                "max_retries",
                &self.max_retries,
                &"must be positive",
            ));
        }

        let (minimum_width, minimum_height) = self.minimum_dimensions();
        if self.width < minimum_width
            || self.height < minimum_height
            || self.width > MAX_GRID_DIMENSION
            || self.height > MAX_GRID_DIMENSION
        {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
                minimum_width,
                minimum_height,
            });
        }

        Ok(())
    }
}

/// A finished dungeon level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonMap {
    seed: u64,
    grid: TileGrid,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    decorations: Decorations,
}

impl DungeonMap {
    /// Seed the map was generated from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Final tile grid
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Take ownership of the tile grid
    pub fn into_grid(self) -> TileGrid {
        self.grid
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Rooms in placement order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of placed rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Accepted corridors in selection order
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Where the avatar starts
    pub const fn start_position(&self) -> Coordinate {
        self.decorations.start
    }

    /// Obstacle positions in room order
    pub fn obstacles(&self) -> &[Coordinate] {
        &self.decorations.obstacles
    }

    /// Exit positions
    pub fn exits(&self) -> &[Coordinate] {
        &self.decorations.exits
    }

    /// Obstacles a collector has to gather to clear the level
    pub fn obstacle_goal(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }
}

/// Dungeon generation pipeline driven by a single seeded stream
///
/// Phases run strictly in order: room placement, candidate corridors,
/// spanning tree selection, wall overlay, decoration. Reordering any of them
/// changes the random draws and therefore the map a seed produces.
pub struct MapGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    grid: TileGrid,
}

impl MapGenerator {
    /// Validate the configuration and allocate an empty grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`GeneratorConfig::validate`]
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            grid: TileGrid::new(config.width, config.height),
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every phase and return the finished map
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than two rooms fit before the retry budget runs out
    /// - The candidate corridors cannot connect every room
    /// - The rooms lack space for the exits
    pub fn generate(mut self) -> Result<DungeonMap> {
        let span = tracing::debug_span!(
            "generate",
            seed = self.config.seed,
            width = self.config.width,
            height = self.config.height
        );
        let _entered = span.enter();

        let placement = place_rooms(&mut self.grid, &self.config, &mut self.rng);
        tracing::debug!(
            rooms = placement.rooms.len(),
            retries = placement.retries,
            "rooms placed"
        );
        if placement.rooms.len() < 2 {
            return Err(GenerationError::InsufficientRooms {
                placed: placement.rooms.len(),
                retries: placement.retries,
            });
        }
        let rooms = placement.rooms;

        let candidates = build_candidates(&rooms, &mut self.rng)?;
        tracing::debug!(candidates = candidates.len(), "candidate corridors built");

        let corridors = select_spanning_corridors(rooms.len(), candidates, &mut self.grid)?;
        tracing::debug!(
            corridors = corridors.len(),
            total_length = corridors.iter().map(Corridor::length).sum::<u32>(),
            "spanning corridors selected"
        );

        for room in &rooms {
            room.draw_walls(&mut self.grid);
        }
        for corridor in &corridors {
            corridor.draw_walls(&mut self.grid);
        }

        let decorations = decorate(
            &mut self.grid,
            &rooms,
            &corridors,
            EXIT_COUNT,
            &mut self.rng,
        )
        .ok_or(GenerationError::InsufficientRooms {
            placed: rooms.len(),
            retries: placement.retries,
        })?;
        tracing::debug!(
            start = %decorations.start,
            obstacles = decorations.obstacles.len(),
            "map decorated"
        );

        Ok(DungeonMap {
            seed: self.config.seed,
            grid: self.grid,
            rooms,
            corridors,
            decorations,
        })
    }
}

/// Generate a map in one call
///
/// # Errors
///
/// Returns an error if validation or any generation phase fails
pub fn generate(config: &GeneratorConfig) -> Result<DungeonMap> {
    MapGenerator::new(*config)?.generate()
}
