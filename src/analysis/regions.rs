//! Colour and connected-region census of rendered tiles
//!
//! Used to summarise exported tiles and to check that connectors really
//! partition a face: a merged edge pair shows up as one region, separated
//! edges as one region each.

use crate::tileset::builder::RenderedTile;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;

/// Pixel counts per exact colour
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCensus {
    counts: BTreeMap<[u8; 4], usize>,
    total: usize,
}

impl ColorCensus {
    /// Count every pixel of an image
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut counts = BTreeMap::new();
        for pixel in image.pixels() {
            *counts.entry(pixel.0).or_insert(0) += 1;
        }
        Self {
            counts,
            total: image.width() as usize * image.height() as usize,
        }
    }

    /// Pixels of exactly `color`
    pub fn count(&self, color: Rgba<u8>) -> usize {
        self.counts.get(&color.0).copied().unwrap_or(0)
    }

    /// Fraction of the image covered by `color`
    pub fn share(&self, color: Rgba<u8>) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(color) as f64 / self.total as f64
    }

    /// Distinct colours present, in channel order
    pub fn colors(&self) -> impl Iterator<Item = Rgba<u8>> + '_ {
        self.counts.keys().map(|&channels| Rgba(channels))
    }

    /// Number of distinct colours present
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total pixel count
    pub const fn total(&self) -> usize {
        self.total
    }
}

/// One 4-connected area of a single colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Colour shared by every pixel of the region
    pub color: Rgba<u8>,
    /// Pixel count
    pub area: usize,
}

/// Connected-component labelling of an image by exact colour
#[derive(Debug, Clone)]
pub struct RegionMap {
    /// Region index + 1 per pixel, indexed `(row, col)`
    labels: Array2<u32>,
    regions: Vec<Region>,
}

impl RegionMap {
    /// Label every pixel with its 4-connected same-colour region
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut labels = Array2::<u32>::zeros((height, width));
        let mut regions = Vec::new();
        let mut queue = VecDeque::new();

        for row in 0..height {
            for col in 0..width {
                if labels.get((row, col)).copied().unwrap_or(1) != 0 {
                    continue;
                }
                let Some(&color) = image.get_pixel_checked(col as u32, row as u32) else {
                    continue;
                };

                let label = regions.len() as u32 + 1;
                let mut area = 0;
                if let Some(cell) = labels.get_mut((row, col)) {
                    *cell = label;
                }
                queue.push_back((row, col));

                while let Some((r, c)) = queue.pop_front() {
                    area += 1;
                    let neighbours = [
                        r.checked_sub(1).map(|nr| (nr, c)),
                        (r + 1 < height).then_some((r + 1, c)),
                        c.checked_sub(1).map(|nc| (r, nc)),
                        (c + 1 < width).then_some((r, c + 1)),
                    ];
                    for (nr, nc) in neighbours.into_iter().flatten() {
                        let same = image.get_pixel_checked(nc as u32, nr as u32) == Some(&color);
                        if let Some(cell) = labels.get_mut((nr, nc)) {
                            if *cell == 0 && same {
                                *cell = label;
                                queue.push_back((nr, nc));
                            }
                        }
                    }
                }

                regions.push(Region { color, area });
            }
        }

        Self { labels, regions }
    }

    /// All regions in discovery order, top-left first
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region containing pixel `(x, y)`
    pub fn region_at(&self, x: u32, y: u32) -> Option<&Region> {
        let label = *self.labels.get((y as usize, x as usize))?;
        self.regions.get(label.checked_sub(1)? as usize)
    }

    /// Regions of one colour
    pub fn regions_of(&self, color: Rgba<u8>) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(move |region| region.color == color)
    }

    /// Number of separate regions of one colour
    pub fn region_count(&self, color: Rgba<u8>) -> usize {
        self.regions_of(color).count()
    }
}

/// Coverage of the palette colours on one tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileSummary {
    /// Tile name
    pub name: String,
    /// `(colour, share of the tile, region count)` for each colour present
    pub fills: Vec<(Rgba<u8>, f64, usize)>,
}

impl TileSummary {
    /// Summarise how much of `tile` each of `colors` covers
    ///
    /// Only exact matches count, so anti-aliased edges are ignored.
    pub fn of(tile: &RenderedTile, colors: &[Rgba<u8>]) -> Self {
        let census = ColorCensus::from_image(&tile.image);
        let regions = RegionMap::from_image(&tile.image);
        let fills = colors
            .iter()
            .filter(|&&color| census.count(color) > 0)
            .map(|&color| (color, census.share(color), regions.region_count(color)))
            .collect();
        Self {
            name: tile.name.clone(),
            fills,
        }
    }
}

impl fmt::Display for TileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for (Rgba([r, g, b, _]), share, count) in &self.fills {
            write!(
                f,
                " #{r:02x}{g:02x}{b:02x} {:.1}% in {count} region{}",
                share * 100.0,
                if *count == 1 { "" } else { "s" }
            )?;
        }
        Ok(())
    }
}
