//! Circular layout: vertices evenly spaced on a fixed circle.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};
use crate::payload::{max_vertex, Edge, VertexId};

/// A point on the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry of the drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Center of the layout circle.
    pub center: Point,
    /// Radius of the layout circle.
    pub radius: f64,
    /// Radius of each vertex glyph.
    pub vertex_radius: f64,
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Largest vertex id that will be laid out. One slot is allocated per id.
    pub max_vertices: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            center: Point::new(400.0, 240.0),
            radius: 220.0,
            vertex_radius: 16.0,
            width: 800.0,
            height: 480.0,
            max_vertices: 10_000,
        }
    }
}

/// Vertex positions for one render pass.
///
/// Vertex `i` sits at angle `2π·i/n`, so vertex `n` shares the angle of the
/// (never drawn) slot 0.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularLayout {
    params: LayoutParams,
    /// Index 0 is unused.
    positions: Vec<Point>,
}

impl CircularLayout {
    /// Lay out vertices `1..=max id in edges` with the default geometry.
    pub fn compute(edges: &[Edge]) -> VizResult<Self> {
        Self::with_params(edges, LayoutParams::default())
    }

    /// Fails when the largest id is above `params.max_vertices`.
    pub fn with_params(edges: &[Edge], params: LayoutParams) -> VizResult<Self> {
        let n = max_vertex(edges).unwrap_or(0);
        if n > params.max_vertices {
            return Err(VizError::TooManyVertices {
                max_id: n,
                limit: params.max_vertices,
            });
        }
        let mut positions = Vec::with_capacity(n as usize + 1);
        positions.push(params.center);
        for i in 1..=n {
            let angle = TAU * f64::from(i) / f64::from(n);
            positions.push(Point::new(
                params.center.x + params.radius * angle.cos(),
                params.center.y + params.radius * angle.sin(),
            ));
        }
        Ok(Self { params, positions })
    }

    /// Number of laid out vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() - 1
    }

    /// Position of `id`, or `None` outside `1..=n`.
    pub fn position(&self, id: VertexId) -> Option<Point> {
        if id == 0 {
            return None;
        }
        self.positions.get(id as usize).copied()
    }

    /// Iterate `(id, position)` for every vertex in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, p)| (i as VertexId, *p))
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }
}
