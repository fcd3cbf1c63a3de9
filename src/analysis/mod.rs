//! Inspection of rendered tiles

/// Colour counts and connected regions
pub mod regions;
