//! Plain-text export of tile grids

use std::path::Path;

use crate::io::error::{GenerationError, Result};
use crate::spatial::TileGrid;

/// One glyph per cell, top row first, every row newline-terminated
pub fn grid_to_text(grid: &TileGrid) -> String {
    grid.to_string()
}

/// Write the text form of the grid to a file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn export_grid_as_text(grid: &TileGrid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, grid_to_text(grid)).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write text map",
        source: e,
    })
}
