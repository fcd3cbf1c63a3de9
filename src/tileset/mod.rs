//! Tile set assembly from canonical patterns

/// Per-tile rendering and set collection
pub mod builder;

pub use builder::{RenderConfig, RenderedTile, TileJob, TileSet, TileSetBuilder};
