//! Pattern enumeration under the tile's rotation symmetry

/// Canonical rotation classes of three-edge patterns
pub mod necklace;

pub use necklace::{EdgeLabel, Pattern, canonicalize, generate_combinations};
