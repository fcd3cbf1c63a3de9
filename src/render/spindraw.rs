//! Heading-relative turtle over a hexagonal tile frame
//!
//! Every primitive is expressed relative to the current heading, which
//! points at one of the hexagon's vertices whenever it is a multiple of
//! 60 degrees. Callers describe a tile by turning and drawing, never by
//! absolute coordinates.

use crate::io::configuration::{
    ARC_BASE_LEVEL, ARC_HALF_SPAN, ARC_SIZE_DIVISOR, FILL_SEED_RATIO, LINE_OFFSET_DIVISOR,
    LINE_SKEW, LINE_WIDTH_RATIO, MIN_LINE_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::geometry::{Point, hexagon_canvas_size, rotate};
use crate::render::compiler::DrawOp;
use crate::render::palette::{INK, PAPER};
use crate::render::surface::{RasterCanvas, Surface};
use image::{Rgba, RgbaImage};

const HEXAGON_SIDES: u32 = 6;

/// Turtle state apart from the surface it draws on
///
/// Only `heading` changes after construction; the rest is derived from the
/// tile size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    /// Accumulated turn in degrees, never normalised
    pub heading: i32,
    /// Hexagon circumradius on the supersampled canvas
    pub radius: f64,
    /// Stroke width of frame and connectors
    pub line_width: f64,
    /// Centre of the hexagon
    pub center: Point,
    /// Factor the canvas is scaled down by when finished
    pub supersample: u32,
}

impl DrawState {
    /// Rotate a heading-relative offset into surface space
    pub fn transform(&self, x: f64, y: f64) -> Point {
        rotate(x, y, f64::from(self.heading))
    }

    /// Absolute position of a heading-relative offset
    pub fn locate(&self, x: f64, y: f64) -> Point {
        self.center.offset(self.transform(x, y))
    }
}

/// Turtle owning one tile's surface for the whole render
#[derive(Debug)]
pub struct SpinDraw<S: Surface = RasterCanvas> {
    surface: S,
    state: DrawState,
}

impl SpinDraw<RasterCanvas> {
    /// Allocate a canvas for a tile of circumradius `radius` and stamp the frame
    ///
    /// The canvas is drawn `supersample` times larger than the finished tile.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or supersample factor is not positive,
    /// or the canvas cannot be allocated
    pub fn new(radius: f64, supersample: u32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(invalid_parameter("radius", &radius, &"must be positive"));
        }
        if supersample == 0 {
            return Err(invalid_parameter(
                "supersample",
                &supersample,
                &"must be at least 1",
            ));
        }
        let scaled = radius * f64::from(supersample);
        let (width, height) = hexagon_canvas_size(scaled);
        let canvas = RasterCanvas::new(width, height)?;
        Ok(Self::on_surface(canvas, scaled, supersample))
    }

    /// Downsample the finished canvas to the output size
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is too small to downsample
    pub fn finish(self) -> Result<RgbaImage> {
        let factor = self.state.supersample;
        if factor <= 1 {
            return Ok(self.surface.into_image());
        }
        let resized = self
            .surface
            .resize(self.surface.width() / factor, self.surface.height() / factor)?;
        Ok(resized.into_image())
    }
}

impl<S: Surface> SpinDraw<S> {
    /// Stamp the hexagon frame onto an existing surface
    ///
    /// `radius` is measured in surface pixels; the frame is centred on the
    /// surface with a dark outer ring around a light interior.
    pub fn on_surface(mut surface: S, radius: f64, supersample: u32) -> Self {
        let line_width = (radius * LINE_WIDTH_RATIO)
            .round()
            .max(f64::from(MIN_LINE_WIDTH));
        let center = Point::new(
            f64::from(surface.width()) / 2.0,
            f64::from(surface.height()) / 2.0,
        );

        surface.fill_regular_polygon(center, radius, HEXAGON_SIDES, 0.0, INK);
        surface.fill_regular_polygon(center, radius - line_width, HEXAGON_SIDES, 0.0, PAPER);

        Self {
            surface,
            state: DrawState {
                heading: 0,
                radius,
                line_width,
                center,
                supersample,
            },
        }
    }

    /// Current turtle state
    pub const fn state(&self) -> &DrawState {
        &self.state
    }

    /// Current heading in degrees, as accumulated
    pub const fn heading(&self) -> i32 {
        self.state.heading
    }

    /// Borrow the surface
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Give up the surface without finishing
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Turn by `degrees`
    pub const fn spin(&mut self, degrees: i32) {
        self.state.heading += degrees;
    }

    /// Arc around the vertex ahead
    ///
    /// The arc is centred on the vertex and sweeps the third of a circle
    /// facing back into the tile, from one adjacent edge to the other.
    /// Negative sizes shrink it towards the vertex; positive sizes grow it
    /// towards the centre.
    pub fn arc(&mut self, size: i32) {
        let state = self.state;
        let arc_radius = (ARC_BASE_LEVEL + f64::from(size)) * state.radius / ARC_SIZE_DIVISOR;
        let vertex = state.locate(state.radius, 0.0);
        let back = state.heading + 180;
        self.surface.fill_arc(
            vertex,
            arc_radius,
            f64::from(back - ARC_HALF_SPAN),
            f64::from(back + ARC_HALF_SPAN),
            INK,
            state.line_width,
        );
    }

    /// Chord between two opposite edge midpoints
    ///
    /// The chord is taken at the heading skewed back by 30 degrees and
    /// shifted sideways by `offset` ring levels. The heading is unchanged
    /// afterwards.
    pub fn line(&mut self, offset: i32) {
        self.spin(-LINE_SKEW);
        let state = self.state;
        let apothem = state.radius * 3f64.sqrt() / 2.0;
        let shift = -state.radius * f64::from(offset) / LINE_OFFSET_DIVISOR;
        let from = state.locate(-apothem, shift);
        let to = state.locate(apothem, shift);
        self.spin(LINE_SKEW);

        self.surface.draw_line(from, to, INK, state.line_width);
    }

    /// Flood fill the region just inside the vertex ahead
    ///
    /// Returns the number of pixels recoloured.
    pub fn fill(&mut self, color: Rgba<u8>) -> usize {
        let seed = self.fill_seed();
        self.surface.flood_fill(seed, color)
    }

    /// Where the next fill would start
    pub fn fill_seed(&self) -> Point {
        self.state.locate(self.state.radius * FILL_SEED_RATIO, 0.0)
    }

    /// Execute one instruction
    pub fn apply(&mut self, op: DrawOp) {
        match op {
            DrawOp::Spin(degrees) => self.spin(degrees),
            DrawOp::Arc(size) => self.arc(size),
            DrawOp::Line(offset) => self.line(offset),
            DrawOp::Fill(color) => {
                self.fill(color);
            }
        }
    }

    /// Execute a whole program in order
    pub fn run(&mut self, ops: &[DrawOp]) {
        for &op in ops {
            self.apply(op);
        }
    }
}
