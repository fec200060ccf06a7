//! PNG export of tile grids, one pixel per cell

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::error::{GenerationError, Result};
use crate::spatial::{Coordinate, TileGrid};

/// Render the grid into an RGBA image with the top map row at the top
pub fn grid_to_image(grid: &TileGrid) -> RgbaImage {
    let width = grid.width() as u32;
    let height = grid.height() as u32;

    ImageBuffer::from_fn(width, height, |pixel_x, pixel_y| {
        let at = Coordinate::new(pixel_x as i32, (height - 1 - pixel_y) as i32);
        let color = grid.get(at).map_or([0, 0, 0, 0], |tile| tile.color());
        Rgba(color)
    })
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &TileGrid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    grid_to_image(grid)
        .save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
