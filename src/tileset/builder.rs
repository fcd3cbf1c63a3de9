//! Rendering of a complete tile set
//!
//! Every tile gets a fresh turtle and canvas, so renders share nothing but
//! the read-only palette and configuration and may run in any order or in
//! parallel with identical results.

use crate::combinatorics::necklace::{EdgeLabel, Pattern, generate_combinations_nonempty};
use crate::io::configuration::{
    BACK_NAME, DEFAULT_ROTATION_DEGREES, DEFAULT_SUPERSAMPLE, DEFAULT_TILE_SIZE, MAX_SUPERSAMPLE,
    MAX_TILE_SIZE, MIN_TILE_SIZE, OUTPUT_EXTENSION, TILE_NAME_PREFIX,
};
use crate::io::error::{Result, TileError, invalid_parameter};
use crate::render::compiler::{compile, compile_back};
use crate::render::palette::Palette;
use crate::render::spindraw::SpinDraw;
use crate::render::surface::RasterCanvas;
use image::RgbaImage;
use rayon::prelude::*;

/// Output size and orientation of rendered tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Finished tile width in pixels, vertex to vertex
    pub tile_size: u32,
    /// Integer oversampling factor used while drawing
    pub supersample: u32,
    /// Counter-clockwise quarter-turn rotation applied to finished tiles
    pub rotation_degrees: i32,
    /// Prefix of every tile name
    pub prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            supersample: DEFAULT_SUPERSAMPLE,
            rotation_degrees: DEFAULT_ROTATION_DEGREES,
            prefix: TILE_NAME_PREFIX.to_string(),
        }
    }
}

impl RenderConfig {
    /// Check every field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns an error naming the first field that is out of range
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&self.tile_size) {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &format!("must be between {MIN_TILE_SIZE} and {MAX_TILE_SIZE}"),
            ));
        }
        if !(1..=MAX_SUPERSAMPLE).contains(&self.supersample) {
            return Err(invalid_parameter(
                "supersample",
                &self.supersample,
                &format!("must be between 1 and {MAX_SUPERSAMPLE}"),
            ));
        }
        if self.rotation_degrees % 90 != 0 {
            return Err(invalid_parameter(
                "rotation_degrees",
                &self.rotation_degrees,
                &"must be a multiple of 90",
            ));
        }
        if self.prefix.is_empty() || self.prefix.contains(['/', '\\']) {
            return Err(invalid_parameter(
                "prefix",
                &self.prefix,
                &"must be a non-empty file name component",
            ));
        }
        Ok(())
    }

    /// Hexagon circumradius of the finished tile
    pub fn radius(&self) -> f64 {
        f64::from(self.tile_size) / 2.0
    }
}

/// One unit of work in a tile set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileJob {
    /// A face showing a canonical pattern
    Face(Pattern),
    /// The back shared by every tile
    Back,
}

impl TileJob {
    /// Name downstream packaging refers to the tile by
    ///
    /// Faces are `{prefix}-{labels}`; the back is `{prefix}-back`.
    pub fn name(&self, prefix: &str) -> String {
        match self {
            Self::Face(pattern) => format!("{prefix}-{pattern}"),
            Self::Back => format!("{prefix}-{BACK_NAME}"),
        }
    }

    /// File name of the exported tile
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}.{OUTPUT_EXTENSION}", self.name(prefix))
    }
}

/// A finished tile raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTile {
    /// Name under which the tile is exported
    pub name: String,
    /// Pattern shown on the face, `None` for the back
    pub pattern: Option<Pattern>,
    /// Finished raster
    pub image: RgbaImage,
}

impl RenderedTile {
    /// File name of the exported tile
    pub fn file_name(&self) -> String {
        format!("{}.{OUTPUT_EXTENSION}", self.name)
    }

    /// Check whether this is the shared back face
    pub const fn is_back(&self) -> bool {
        self.pattern.is_none()
    }
}

/// All tiles of a set, faces in pattern order followed by the back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSet {
    tiles: Vec<RenderedTile>,
}

impl TileSet {
    /// Number of tiles including the back
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether the set holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in render order
    pub fn iter(&self) -> impl Iterator<Item = &RenderedTile> {
        self.tiles.iter()
    }

    /// Face tiles only
    pub fn faces(&self) -> impl Iterator<Item = &RenderedTile> {
        self.tiles.iter().filter(|tile| !tile.is_back())
    }

    /// Find a tile by name
    pub fn get(&self, name: &str) -> Option<&RenderedTile> {
        self.tiles.iter().find(|tile| tile.name == name)
    }

    /// The back face, if rendered
    pub fn back(&self) -> Option<&RenderedTile> {
        self.tiles.iter().find(|tile| tile.is_back())
    }

    /// Take ownership of the tiles
    pub fn into_tiles(self) -> Vec<RenderedTile> {
        self.tiles
    }
}

/// Renders faces and backs with a fixed palette and configuration
#[derive(Debug, Clone)]
pub struct TileSetBuilder {
    palette: Palette,
    config: RenderConfig,
}

impl TileSetBuilder {
    /// Create a builder
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is out of range
    pub fn new(palette: Palette, config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { palette, config })
    }

    /// Palette used for every render
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Configuration used for every render
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Canonical patterns for `alphabet`, checked against the palette
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty or uses a label the palette
    /// cannot draw
    pub fn combinations(&self, alphabet: &[EdgeLabel]) -> Result<Vec<Pattern>> {
        if let Some(missing) = alphabet.iter().find(|&&label| !self.palette.contains(label)) {
            return Err(TileError::InvalidAlphabet {
                reason: format!("label '{missing}' is not in the palette"),
            });
        }
        generate_combinations_nonempty(alphabet)
    }

    /// Every job for `alphabet`: faces in pattern order, then the back
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::combinations`]
    pub fn jobs(&self, alphabet: &[EdgeLabel]) -> Result<Vec<TileJob>> {
        let mut jobs: Vec<TileJob> = self
            .combinations(alphabet)?
            .into_iter()
            .map(TileJob::Face)
            .collect();
        jobs.push(TileJob::Back);
        Ok(jobs)
    }

    /// Render one face
    ///
    /// The pattern is drawn as given; callers wanting the set's tile pass
    /// the canonical rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if a label is missing from the palette or the
    /// canvas cannot be allocated
    pub fn render_pattern(&self, pattern: &Pattern) -> Result<RenderedTile> {
        let program = compile(pattern, &self.palette)?;
        let mut turtle = SpinDraw::new(self.config.radius(), self.config.supersample)?;
        turtle.run(&program);
        Ok(RenderedTile {
            name: TileJob::Face(*pattern).name(&self.config.prefix),
            pattern: Some(*pattern),
            image: self.orient(turtle.finish()?)?,
        })
    }

    /// Render the shared back face
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated
    pub fn render_back(&self) -> Result<RenderedTile> {
        let program = compile_back(&self.palette);
        let mut turtle = SpinDraw::new(self.config.radius(), self.config.supersample)?;
        turtle.run(&program);
        Ok(RenderedTile {
            name: TileJob::Back.name(&self.config.prefix),
            pattern: None,
            image: self.orient(turtle.finish()?)?,
        })
    }

    /// Render a single job
    ///
    /// # Errors
    ///
    /// Returns an error if the render fails
    pub fn render(&self, job: &TileJob) -> Result<RenderedTile> {
        match job {
            TileJob::Face(pattern) => self.render_pattern(pattern),
            TileJob::Back => self.render_back(),
        }
    }

    /// Render every canonical pattern of `alphabet` plus the back, in order
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is invalid or any render fails; no
    /// partial set is returned
    pub fn build(&self, alphabet: &[EdgeLabel]) -> Result<TileSet> {
        let tiles = self
            .jobs(alphabet)?
            .iter()
            .map(|job| self.render(job))
            .collect::<Result<Vec<_>>>()?;
        Ok(TileSet { tiles })
    }

    /// Same set as [`Self::build`], rendered across the rayon pool
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is invalid or any render fails; no
    /// partial set is returned
    pub fn build_parallel(&self, alphabet: &[EdgeLabel]) -> Result<TileSet> {
        let tiles = self
            .jobs(alphabet)?
            .par_iter()
            .map(|job| self.render(job))
            .collect::<Result<Vec<_>>>()?;
        Ok(TileSet { tiles })
    }

    fn orient(&self, image: RgbaImage) -> Result<RgbaImage> {
        Ok(RasterCanvas::from_image(image)
            .rotate(self.config.rotation_degrees)?
            .into_image())
    }
}
