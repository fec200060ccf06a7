//! Command-line interface for generating and exporting batches of maps

use crate::algorithm::executor::{GeneratorConfig, MapGenerator};
use crate::analysis::connectivity::is_fully_connected;
use crate::analysis::statistics::MapStatistics;
use crate::io::configuration::{
    DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_MAX_RETRIES, DEFAULT_OUTPUT_DIR, DEFAULT_SEED,
    DEFAULT_WIDTH, OUTPUT_PREFIX,
};
use crate::io::error::{GenerationError, Result};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::export_grid_as_text;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dungeongen")]
#[command(author, version, about = "Generate seeded dungeon maps")]
/// Command-line arguments for the map generator
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seed of the first map
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Map width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of consecutive seeds to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Rejected room placements before a map stops adding rooms
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: usize,

    /// Directory receiving the exported maps
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Also write a plain-text copy of every map
    #[arg(short, long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate maps even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator configuration for one seed
    pub const fn config_for(&self, seed: u64) -> GeneratorConfig {
        GeneratorConfig::new(self.width, self.height, seed).with_max_retries(self.max_retries)
    }

    /// Seeds covered by this run, in order
    pub fn seeds(&self) -> impl Iterator<Item = u64> {
        let first = self.seed;
        (0..self.count as u64).map(move |offset| first.wrapping_add(offset))
    }
}

/// Generates every requested seed and writes its map files
pub struct MapExporter {
    cli: Cli,
    progress: ProgressManager,
}

impl MapExporter {
    /// Create an exporter for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };

        Self { cli, progress }
    }

    /// Generate and export every seed
    ///
    /// Seeds that cannot hold two rooms are logged and skipped so the rest of
    /// the batch still runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an export fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.config_for(self.cli.seed).validate()?;

        let seeds: Vec<u64> = self.cli.seeds().collect();
        for seed in seeds {
            self.process_seed(seed)?;
        }

        self.progress.finish();
        let (generated, skipped, failed) = self.progress.totals();
        tracing::info!(generated, skipped, failed, "batch complete");
        Ok(())
    }

    /// Generated, skipped and failed seed counts so far
    pub const fn totals(&self) -> (usize, usize, usize) {
        self.progress.totals()
    }

    fn process_seed(&mut self, seed: u64) -> Result<()> {
        self.progress.start_seed(seed);

        let image_path = self.image_path(seed);
        let text_path = self.text_path(seed);
        if self.cli.skip_existing()
            && image_path.exists()
            && (!self.cli.text || text_path.exists())
        {
            tracing::info!(seed, path = %image_path.display(), "output exists, skipping");
            self.progress.skip_seed();
            return Ok(());
        }

        let map = match MapGenerator::new(self.cli.config_for(seed))?.generate() {
            Ok(map) => map,
            Err(error @ GenerationError::InsufficientRooms { .. }) => {
                tracing::warn!(seed, reason = error.reason_code(), "{error}");
                self.progress.fail_seed();
                return Ok(());
            }
            Err(error) => return Err(error),
        };

        let statistics = MapStatistics::collect(&map);
        tracing::info!(connected = is_fully_connected(&map), "{statistics}");

        export_grid_as_png(map.grid(), &image_path)?;
        if self.cli.text {
            export_grid_as_text(map.grid(), &text_path)?;
        }

        self.progress.complete_seed();
        Ok(())
    }

    /// Path of the PNG written for a seed
    pub fn image_path(&self, seed: u64) -> PathBuf {
        Self::output_path(&self.cli.output, seed, "png")
    }

    /// Path of the text map written for a seed
    pub fn text_path(&self, seed: u64) -> PathBuf {
        Self::output_path(&self.cli.output, seed, "txt")
    }

    fn output_path(directory: &Path, seed: u64, extension: &str) -> PathBuf {
        directory.join(format!("{OUTPUT_PREFIX}_{seed}.{extension}"))
    }
}
