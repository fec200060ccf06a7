//! Generation constants and runtime configuration defaults

/// Smallest outer room width, walls included
pub const MIN_ROOM_WIDTH: i32 = 4;
/// Smallest outer room height, walls included
pub const MIN_ROOM_HEIGHT: i32 = 4;

// Rooms need a wall ring around at least one floor cell
/// Smallest minimum room side accepted by validation
pub const MIN_ROOM_SIDE_LIMIT: i32 = 3;

/// Rejected placement attempts before room placement stops
pub const DEFAULT_MAX_RETRIES: usize = 1000;

/// Cells kept free between room footprints and the grid edge
pub const BORDER_MARGIN: i32 = 1;

/// Number of unlocked exits placed on every map
pub const EXIT_COUNT: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Rows a host game reserves for its heads-up display
pub const HUD_MARGIN: usize = 3;

/// Default map width
pub const DEFAULT_WIDTH: usize = 80;
/// Default map height (a 30-row window minus the HUD)
pub const DEFAULT_HEIGHT: usize = 30 - HUD_MARGIN;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 3225;

/// Number of consecutive seeds generated per run
pub const DEFAULT_COUNT: usize = 1;

// Output settings
/// Default directory for exported maps
pub const DEFAULT_OUTPUT_DIR: &str = "maps";
/// Prefix of exported map filenames
pub const OUTPUT_PREFIX: &str = "dungeon";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
