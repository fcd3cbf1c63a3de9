//! PNG export of rendered tiles

use crate::io::error::{Result, TileError};
use crate::tileset::builder::{RenderedTile, TileSet};
use std::path::{Path, PathBuf};

/// Create `directory` and any missing parents
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_directory(directory: &Path) -> Result<()> {
    std::fs::create_dir_all(directory).map_err(|e| TileError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}

/// Save one tile as `<directory>/<name>.png`
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The image cannot be saved to the resulting path
pub fn export_tile_as_png(tile: &RenderedTile, directory: &Path) -> Result<PathBuf> {
    ensure_directory(directory)?;

    let output_path = directory.join(tile.file_name());
    tile.image
        .save(&output_path)
        .map_err(|e| TileError::ImageExport {
            path: output_path.clone(),
            source: e,
        })?;

    Ok(output_path)
}

/// Save every tile of a set, returning the written paths in set order
///
/// # Errors
///
/// Returns the first export failure; tiles before it remain on disk
pub fn export_tile_set(tile_set: &TileSet, directory: &Path) -> Result<Vec<PathBuf>> {
    tile_set
        .iter()
        .map(|tile| export_tile_as_png(tile, directory))
        .collect()
}
