//! Raster drawing surface consumed by the turtle
//!
//! Shapes are rasterised by sampling pixel centres, so a stroke of width
//! two or more always seals the region behind it for 4-connected fills.

use crate::io::error::{Result, invalid_parameter, surface_error};
use crate::math::geometry::{Point, angle_within, distance_across_segment, polar};
use bitvec::prelude::*;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Fully transparent pixel, the colour of a fresh canvas
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Drawing capability the turtle renders through
///
/// Angles follow [`crate::math::geometry`]: degrees from the positive x
/// axis towards the positive y axis of the raster.
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Colour of the pixel containing `at`, if it lies on the surface
    fn pixel(&self, at: Point) -> Option<Rgba<u8>>;

    /// Fill a regular polygon whose first vertex lies at `rotation` degrees
    fn fill_regular_polygon(
        &mut self,
        center: Point,
        radius: f64,
        sides: u32,
        rotation: f64,
        color: Rgba<u8>,
    );

    /// Stroke the circular arc from `start` to `end` degrees
    ///
    /// The stroke lies inside the circle: it covers radii from
    /// `radius - stroke_width` to `radius`.
    fn fill_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        color: Rgba<u8>,
        stroke_width: f64,
    );

    /// Stroke a straight segment with flat ends
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba<u8>, stroke_width: f64);

    /// Replace the 4-connected region of the seed pixel's colour with `color`
    ///
    /// Returns the number of pixels changed. Seeds off the surface and seeds
    /// already of `color` change nothing.
    fn flood_fill(&mut self, seed: Point, color: Rgba<u8>) -> usize;
}

/// RGBA raster implementation of [`Surface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    /// Allocate a transparent canvas
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the pixel buffer
    /// would not fit in memory
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(surface_error(
                "new_canvas",
                &format!("canvas must not be empty, got {width}x{height}"),
            ));
        }
        let len = usize::try_from(u64::from(width) * u64::from(height))
            .ok()
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                surface_error(
                    "new_canvas",
                    &format!("{width}x{height} canvas exceeds addressable memory"),
                )
            })?;

        let mut buffer: Vec<u8> = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|e| surface_error("new_canvas", &e))?;
        // Zeroed channels are exactly TRANSPARENT
        buffer.resize(len, 0);

        let image = RgbaImage::from_raw(width, height, buffer).ok_or_else(|| {
            surface_error("new_canvas", &"pixel buffer does not match dimensions")
        })?;
        Ok(Self { image })
    }

    /// Wrap an existing image
    pub const fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the underlying image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Resample to a new size with a Lanczos filter
    ///
    /// # Errors
    ///
    /// Returns an error if either target dimension is zero
    pub fn resize(&self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(surface_error(
                "resize",
                &format!("cannot resize to {width}x{height}"),
            ));
        }
        Ok(Self {
            image: imageops::resize(&self.image, width, height, FilterType::Lanczos3),
        })
    }

    /// Rotate counter-clockwise on screen by a multiple of 90 degrees
    ///
    /// The canvas grows to hold the rotated image, like an expanding
    /// rotate.
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is not a multiple of 90
    pub fn rotate(&self, degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(invalid_parameter(
                "rotation_degrees",
                &degrees,
                &"only quarter turns are supported",
            ));
        }
        let image = match degrees.rem_euclid(360) {
            90 => imageops::rotate270(&self.image),
            180 => imageops::rotate180(&self.image),
            270 => imageops::rotate90(&self.image),
            _ => self.image.clone(),
        };
        Ok(Self { image })
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.image.width() as usize + x as usize
    }

    // Pixel-centre sampling over the clipped bounding box of a shape
    fn paint_where(
        &mut self,
        min: Point,
        max: Point,
        color: Rgba<u8>,
        inside: impl Fn(Point) -> bool,
    ) {
        let (width, height) = (self.image.width(), self.image.height());
        let x_start = min.x.floor().max(0.0) as u32;
        let y_start = min.y.floor().max(0.0) as u32;
        let x_end = (max.x.ceil().max(0.0) as u32).min(width);
        let y_end = (max.y.ceil().max(0.0) as u32).min(height);

        for y in y_start..y_end {
            for x in x_start..x_end {
                let sample = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if inside(sample) {
                    if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
                        *pixel = color;
                    }
                }
            }
        }
    }

    fn fillable(&self, filled: &BitVec, x: u32, y: u32, target: Rgba<u8>) -> bool {
        let already = filled
            .get(self.index_of(x, y))
            .as_deref()
            .copied()
            .unwrap_or(true);
        !already && self.image.get_pixel_checked(x, y) == Some(&target)
    }

    fn seed_pixel(&self, seed: Point) -> Option<(u32, u32)> {
        if seed.x < 0.0 || seed.y < 0.0 {
            return None;
        }
        let (x, y) = (seed.x.floor() as u32, seed.y.floor() as u32);
        (x < self.image.width() && y < self.image.height()).then_some((x, y))
    }
}

impl Surface for RasterCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn pixel(&self, at: Point) -> Option<Rgba<u8>> {
        let (x, y) = self.seed_pixel(at)?;
        self.image.get_pixel_checked(x, y).copied()
    }

    fn fill_regular_polygon(
        &mut self,
        center: Point,
        radius: f64,
        sides: u32,
        rotation: f64,
        color: Rgba<u8>,
    ) {
        if sides < 3 || radius <= 0.0 {
            return;
        }
        let step = 360.0 / f64::from(sides);
        let vertices: Vec<Point> = (0..sides)
            .map(|k| polar(center, radius, f64::from(k).mul_add(step, rotation)))
            .collect();
        let edges: Vec<(Point, Point)> = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| (a, b))
            .collect();

        let inside = |p: Point| {
            let crosses = edges
                .iter()
                .map(|(a, b)| (b.x - a.x).mul_add(p.y - a.y, -((b.y - a.y) * (p.x - a.x))));
            let mut positive = true;
            let mut negative = true;
            for cross in crosses {
                positive &= cross >= 0.0;
                negative &= cross <= 0.0;
            }
            positive || negative
        };
        self.paint_where(
            Point::new(center.x - radius, center.y - radius),
            Point::new(center.x + radius, center.y + radius),
            color,
            inside,
        );
    }

    fn fill_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        color: Rgba<u8>,
        stroke_width: f64,
    ) {
        if radius <= 0.0 || stroke_width <= 0.0 {
            return;
        }
        let inner = (radius - stroke_width).max(0.0);
        let inside = |p: Point| {
            let offset = Point::new(p.x - center.x, p.y - center.y);
            let distance = offset.distance(Point::new(0.0, 0.0));
            (inner..=radius).contains(&distance) && angle_within(offset.angle(), start, end)
        };
        self.paint_where(
            Point::new(center.x - radius, center.y - radius),
            Point::new(center.x + radius, center.y + radius),
            color,
            inside,
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba<u8>, stroke_width: f64) {
        if stroke_width <= 0.0 {
            return;
        }
        let half = stroke_width / 2.0;
        let inside =
            |p: Point| distance_across_segment(p, from, to).is_some_and(|distance| distance <= half);
        self.paint_where(
            Point::new(from.x.min(to.x) - half, from.y.min(to.y) - half),
            Point::new(from.x.max(to.x) + half, from.y.max(to.y) + half),
            color,
            inside,
        );
    }

    fn flood_fill(&mut self, seed: Point, color: Rgba<u8>) -> usize {
        let Some((seed_x, seed_y)) = self.seed_pixel(seed) else {
            return 0;
        };
        let Some(&target) = self.image.get_pixel_checked(seed_x, seed_y) else {
            return 0;
        };
        if target == color {
            return 0;
        }

        let (width, height) = (self.image.width(), self.image.height());
        let mut filled = bitvec![0; width as usize * height as usize];
        let mut stack = vec![(seed_x, seed_y)];
        let mut count = 0;

        while let Some((x, y)) = stack.pop() {
            if !self.fillable(&filled, x, y, target) {
                continue;
            }

            let mut left = x;
            while left > 0 && self.fillable(&filled, left - 1, y, target) {
                left -= 1;
            }
            let mut right = x;
            while right + 1 < width && self.fillable(&filled, right + 1, y, target) {
                right += 1;
            }

            for px in left..=right {
                let index = self.index_of(px, y);
                filled.set(index, true);
                if let Some(pixel) = self.image.get_pixel_mut_checked(px, y) {
                    *pixel = color;
                }
                count += 1;
            }

            // One seed per run on the neighbouring scanlines
            let neighbours = [y.checked_sub(1), (y + 1 < height).then_some(y + 1)];
            for ny in neighbours.into_iter().flatten() {
                let mut px = left;
                while px <= right {
                    if self.fillable(&filled, px, ny, target) {
                        stack.push((px, ny));
                        while px <= right && self.fillable(&filled, px, ny, target) {
                            px += 1;
                        }
                    } else {
                        px += 1;
                    }
                }
            }
        }

        count
    }
}
