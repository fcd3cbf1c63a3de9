//! Planar helpers shared by the surface and the turtle
//!
//! All angles are in degrees and measured from the positive x axis towards
//! the positive y axis of the raster, so with y pointing down a positive
//! angle turns clockwise on screen. Surfaces and the turtle both use this
//! convention, which keeps arc spans and rotated points in agreement.

/// A point in raster space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by another point
    #[must_use]
    pub fn offset(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Direction from the origin to this point, in `[0, 360)`
    pub fn angle(self) -> f64 {
        normalize_degrees(self.y.atan2(self.x).to_degrees())
    }
}

/// Rotate `(x, y)` about the origin by `degrees`
pub fn rotate(x: f64, y: f64, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(x.mul_add(cos, -(y * sin)), x.mul_add(sin, y * cos))
}

/// Point at `radius` along direction `degrees` from `center`
pub fn polar(center: Point, radius: f64, degrees: f64) -> Point {
    center.offset(rotate(radius, 0.0, degrees))
}

/// Reduce any angle to `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if reduced >= 360.0 { 0.0 } else { reduced }
}

/// Test whether `degrees` lies on the sweep from `start` to `end`
///
/// The sweep runs in the positive direction; a sweep of 360 or more
/// covers every angle.
pub fn angle_within(degrees: f64, start: f64, end: f64) -> bool {
    if end - start >= 360.0 {
        return true;
    }
    let span = normalize_degrees(end - start);
    normalize_degrees(degrees - start) <= span
}

/// Perpendicular distance from `p` to the segment `a`-`b`
///
/// Returns `None` when `p` projects outside the segment, which gives
/// strokes flat ends at their endpoints.
pub fn distance_across_segment(p: Point, a: Point, b: Point) -> Option<f64> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_squared = dx.mul_add(dx, dy * dy);
    if length_squared <= f64::EPSILON {
        return None;
    }
    let t = (p.x - a.x).mul_add(dx, (p.y - a.y) * dy) / length_squared;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some(p.distance(Point::new(t.mul_add(dx, a.x), t.mul_add(dy, a.y))))
}

/// Canvas size `(width, height)` holding a flat-sided hexagon of radius `r`
pub fn hexagon_canvas_size(radius: f64) -> (u32, u32) {
    let width = (radius * 2.0).round();
    let height = (radius * 2.0 * 60f64.to_radians().sin()).round();
    (width.max(1.0) as u32, height.max(1.0) as u32)
}
