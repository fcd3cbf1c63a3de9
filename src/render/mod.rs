//! Tile rendering: surface, turtle, palette and draw-program compiler

/// Pattern to draw-program compilation
pub mod compiler;
/// Label to colour and ring-level lookup
pub mod palette;
/// Heading-relative turtle over the hexagon frame
pub mod spindraw;
/// Raster surface capability and implementation
pub mod surface;

pub use compiler::{DrawOp, compile, compile_back};
pub use palette::{LabelStyle, Palette};
pub use spindraw::{DrawState, SpinDraw};
pub use surface::{RasterCanvas, Surface};
