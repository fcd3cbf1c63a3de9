//! Procedural renderer for the tiles of a hexagonal colour-matching game
//!
//! Each tile carries three labelled edges. The crate enumerates the
//! rotation-distinct label patterns, compiles each into a short program of
//! heading-relative turtle moves, and draws it onto a hexagon frame with
//! arcs, chords and flood fills.

#![forbid(unsafe_code)]

/// Inspection of rendered tiles
pub mod analysis;
/// Pattern enumeration and canonical rotations
pub mod combinatorics;
/// Input/output operations and error handling
pub mod io;
/// Geometry shared by the surface and the turtle
pub mod math;
/// Surface, turtle, palette and pattern compiler
pub mod render;
/// Tile set assembly and naming
pub mod tileset;

pub use io::error::{Result, TileError};
