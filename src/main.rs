//! CLI entry point for the seeded dungeon generator

use clap::Parser;
use dungeongen::io::cli::{Cli, MapExporter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> dungeongen::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "dungeongen=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut exporter = MapExporter::new(cli);
    exporter.process()
}
