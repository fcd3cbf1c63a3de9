//! Mathematical utilities for the hexagon frame and turtle transforms

/// Points, rotations and angle sweeps in raster space
pub mod geometry;

pub use geometry::Point;
