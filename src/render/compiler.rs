//! Pattern to draw-program compilation
//!
//! Connector topology is decided purely by which neighbouring edges share a
//! label. Edges with equal labels merge into one region, so no connector is
//! drawn between them; differing labels are separated by an arc around
//! their shared vertex or by a chord across the tile.
//!
//! Every program ends its topology phase at the heading it started from.
//! The fill phase depends on that: its seeds are placed purely by heading
//! and must land in the region belonging to each edge.

use crate::combinatorics::necklace::Pattern;
use crate::io::configuration::{EDGE_TURN, VERTEX_TURN};
use crate::io::error::Result;
use crate::render::palette::{LabelStyle, Palette};
use image::Rgba;

/// Number of vertices on the back face
const BACK_CORNERS: usize = 6;

/// One turtle instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Turn the heading by whole degrees
    Spin(i32),
    /// Arc around the vertex ahead, at the given ring level
    Arc(i32),
    /// Chord across the tile, offset by the given ring level
    Line(i32),
    /// Flood fill the region ahead
    Fill(Rgba<u8>),
}

/// Net turn of a program, reduced to `[0, 360)`
///
/// Zero means the program leaves the heading where it found it.
pub fn net_rotation(ops: &[DrawOp]) -> i32 {
    ops.iter()
        .map(|op| match op {
            DrawOp::Spin(degrees) => *degrees,
            _ => 0,
        })
        .sum::<i32>()
        .rem_euclid(360)
}

/// Count the arcs in a program
pub fn arc_count(ops: &[DrawOp]) -> usize {
    ops.iter().filter(|op| matches!(op, DrawOp::Arc(_))).count()
}

/// Count the chords in a program
pub fn line_count(ops: &[DrawOp]) -> usize {
    ops.iter().filter(|op| matches!(op, DrawOp::Line(_))).count()
}

/// Connectors for a pattern, without fills
///
/// # Errors
///
/// Returns an error if a label is missing from the palette
pub fn compile_topology(pattern: &Pattern, palette: &Palette) -> Result<Vec<DrawOp>> {
    let [p0, p1, p2] = pattern.labels();
    let [s0, s1, s2] = [
        palette.style(p0)?.size,
        palette.style(p1)?.size,
        palette.style(p2)?.size,
    ];

    let ops = if p0 == p1 {
        let mut ops = vec![
            DrawOp::Spin(VERTEX_TURN),
            DrawOp::Arc(-s0),
            DrawOp::Spin(-VERTEX_TURN),
        ];
        if p0 == p2 {
            ops.extend([
                DrawOp::Spin(EDGE_TURN + VERTEX_TURN),
                DrawOp::Arc(-s0),
                DrawOp::Spin(EDGE_TURN),
                DrawOp::Arc(-s0),
                DrawOp::Spin(VERTEX_TURN),
            ]);
        } else {
            ops.extend([
                DrawOp::Line(s0),
                DrawOp::Spin(-EDGE_TURN),
                DrawOp::Arc(s2),
                DrawOp::Spin(EDGE_TURN),
            ]);
        }
        ops
    } else if p1 == p2 {
        vec![
            DrawOp::Arc(s0),
            DrawOp::Spin(EDGE_TURN),
            DrawOp::Line(s1),
            DrawOp::Spin(VERTEX_TURN),
            DrawOp::Arc(-s1),
            DrawOp::Spin(-(EDGE_TURN + VERTEX_TURN)),
        ]
    } else {
        vec![
            DrawOp::Arc(s0),
            DrawOp::Spin(EDGE_TURN),
            DrawOp::Arc(s1),
            DrawOp::Spin(EDGE_TURN),
            DrawOp::Arc(s2),
            DrawOp::Spin(EDGE_TURN),
        ]
    };
    Ok(ops)
}

/// Fill each edge region in pattern order, a third of a turn apart
///
/// # Errors
///
/// Returns an error if a label is missing from the palette
pub fn compile_fills(pattern: &Pattern, palette: &Palette) -> Result<Vec<DrawOp>> {
    let mut ops = Vec::with_capacity(2 * pattern.labels().len());
    for label in pattern.labels() {
        let LabelStyle { color, .. } = palette.style(label)?;
        ops.push(DrawOp::Fill(color));
        ops.push(DrawOp::Spin(EDGE_TURN));
    }
    Ok(ops)
}

/// Complete program for a tile face: topology, then fills
///
/// # Errors
///
/// Returns an error if a label is missing from the palette
pub fn compile(pattern: &Pattern, palette: &Palette) -> Result<Vec<DrawOp>> {
    let mut ops = compile_topology(pattern, palette)?;
    ops.extend(compile_fills(pattern, palette)?);
    Ok(ops)
}

/// Program for the shared back face
///
/// Grounds the whole face, then cuts and colours each of the six corners
/// in turn from the palette's back cycle.
pub fn compile_back(palette: &Palette) -> Vec<DrawOp> {
    let back = palette.back();
    let mut ops = vec![DrawOp::Fill(back.ground)];
    for corner in 0..BACK_CORNERS {
        let color = back
            .cycle
            .get(corner % back.cycle.len().max(1))
            .copied()
            .unwrap_or(back.ground);
        ops.extend([DrawOp::Arc(0), DrawOp::Fill(color), DrawOp::Spin(VERTEX_TURN)]);
    }
    ops
}
