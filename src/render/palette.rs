//! Edge label styling
//!
//! Labels are configuration: each maps to a fill colour and a ring level.
//! Labels sharing a colour but not a level draw nested connectors, so a
//! player can still tell `A` from `a` once both are red.

use crate::combinatorics::necklace::EdgeLabel;
use crate::io::error::{Result, invalid_pattern};
use image::Rgba;
use std::collections::BTreeMap;

/// Connector stroke colour
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Unfilled interior of the hexagon frame
pub const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Red edge colour
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
/// Blue edge colour
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
/// Neutral grey used for the back face ground
pub const GREY: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// How one edge label is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    /// Fill colour of the edge's region
    pub color: Rgba<u8>,
    /// Ring level: 0 is the outermost connector, negative levels nest inwards
    pub size: i32,
}

impl LabelStyle {
    /// Create a style
    pub const fn new(color: Rgba<u8>, size: i32) -> Self {
        Self { color, size }
    }
}

/// Colours of the shared back face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackFace {
    /// Colour filling the centre of the back
    pub ground: Rgba<u8>,
    /// Corner colours, cycled around the six vertices
    pub cycle: Vec<Rgba<u8>>,
}

/// Lookup table from edge label to style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: BTreeMap<EdgeLabel, LabelStyle>,
    back: BackFace,
}

impl Default for Palette {
    fn default() -> Self {
        Self::gamut()
    }
}

impl Palette {
    /// Create an empty palette with the given back face
    pub const fn new(back: BackFace) -> Self {
        Self {
            styles: BTreeMap::new(),
            back,
        }
    }

    /// Builder-style insertion of a label
    #[must_use]
    pub fn with(mut self, label: char, style: LabelStyle) -> Self {
        self.insert(EdgeLabel(label), style);
        self
    }

    /// Add or replace a label's style
    pub fn insert(&mut self, label: EdgeLabel, style: LabelStyle) {
        self.styles.insert(label, style);
    }

    /// The full game palette: red, blue and grey at three ring levels
    pub fn gamut() -> Self {
        Self::new(BackFace {
            ground: GREY,
            cycle: vec![RED, BLUE],
        })
        .with('A', LabelStyle::new(RED, 0))
        .with('a', LabelStyle::new(RED, -1))
        .with('e', LabelStyle::new(RED, -2))
        .with('B', LabelStyle::new(BLUE, 0))
        .with('b', LabelStyle::new(BLUE, -1))
        .with('c', LabelStyle::new(BLUE, -2))
        .with('X', LabelStyle::new(GREY, 0))
        .with('x', LabelStyle::new(GREY, -1))
        .with('y', LabelStyle::new(GREY, -2))
    }

    /// Look up a label's style
    ///
    /// # Errors
    ///
    /// Returns an error if the label has no style
    pub fn style(&self, label: EdgeLabel) -> Result<LabelStyle> {
        self.styles.get(&label).copied().ok_or_else(|| {
            invalid_pattern(&label, &format!("label '{label}' is not in the palette"))
        })
    }

    /// Check whether a label has a style
    pub fn contains(&self, label: EdgeLabel) -> bool {
        self.styles.contains_key(&label)
    }

    /// All styled labels in ascending order
    pub fn labels(&self) -> impl Iterator<Item = EdgeLabel> + '_ {
        self.styles.keys().copied()
    }

    /// Every distinct fill colour, labels first, then the back face
    pub fn fill_colors(&self) -> Vec<Rgba<u8>> {
        let mut colors: Vec<Rgba<u8>> = Vec::new();
        let back = std::iter::once(self.back.ground).chain(self.back.cycle.iter().copied());
        for color in self.styles.values().map(|style| style.color).chain(back) {
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        colors
    }

    /// Back face colours
    pub const fn back(&self) -> &BackFace {
        &self.back
    }
}
