use glam::DVec2;
use itertools::Itertools;
use log::warn;
use slotmap::{new_key_type, SlotMap};

use crate::{Drawable, GraphError, Line, Point, Surface};

/// Fixed style for converted graphs.
const GRAPH_COLOR: &str = "green";
const VERTEX_RADIUS: f64 = 1.0;
const EDGE_WIDTH: f64 = 2.0;

/// An arbitrary combination of vertices and connecting edges.
///
/// Plain data consumed from the host; edges are index pairs into `vertices`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub vertices: Vec<DVec2>,
    pub edges: Vec<(usize, usize)>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: DVec2) {
        self.vertices.push(vertex)
    }

    /// Adds an edge between two vertex indices.
    ///
    /// The vertices do not have to exist yet; an index past the current end is
    /// only warned about, since conversion validates the finished shape.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        for index in [from, to] {
            if index >= self.vertices.len() {
                warn!("edge endpoint {} does not name a vertex yet", index);
            }
        }
        self.edges.push((from, to))
    }
}

new_key_type! {
    pub struct PointKey;
}

type Points = SlotMap<PointKey, Point>;

/// A styled connecting line between two graph points.
///
/// Endpoints are keys, not coordinates: the segment resolves its ends through
/// the owning [`Graph`] at draw time, so moving a point moves every line
/// incident to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphLine {
    pub ends: [PointKey; 2],
    pub width: f64,
    pub stroke: String,
}

/// A drawable graph of point markers and the lines connecting them.
///
/// Draw order is fixed: every point first, then every line, so line strokes
/// layer on top of the markers they touch.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    points: Points,
    lines: Vec<GraphLine>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts abstract vertex/edge data into a drawable graph with the
    /// fixed conversion style: radius-1 green markers, width-2 green lines.
    ///
    /// Every edge index is validated against the vertex list.
    pub fn from_shape(shape: &Shape) -> Result<Self, GraphError> {
        let vertices = shape.vertices.len();
        if let Some(&(from, to)) = shape
            .edges
            .iter()
            .find(|(from, to)| *from >= vertices || *to >= vertices)
        {
            return Err(GraphError::EdgeOutOfBounds { from, to, vertices });
        }

        let mut graph = Self::new();
        let keys = shape
            .vertices
            .iter()
            .map(|&loc| graph.add_point(Point::new(loc, VERTEX_RADIUS, GRAPH_COLOR, GRAPH_COLOR)))
            .collect_vec();

        for &(from, to) in &shape.edges {
            graph.connect(keys[from], keys[to], EDGE_WIDTH, GRAPH_COLOR);
        }

        Ok(graph)
    }

    pub fn add_point(&mut self, point: Point) -> PointKey {
        self.points.insert(point)
    }

    pub fn connect(&mut self, a: PointKey, b: PointKey, width: f64, stroke: impl Into<String>) {
        self.lines.push(GraphLine {
            ends: [a, b],
            width,
            stroke: stroke.into(),
        })
    }

    pub fn point(&self, key: PointKey) -> Option<&Point> {
        self.points.get(key)
    }

    /// Mutable access to a point, for hosts that move vertices between
    /// frames. Lines incident to the point follow it.
    pub fn point_mut(&mut self, key: PointKey) -> Option<&mut Point> {
        self.points.get_mut(key)
    }

    pub fn points(&self) -> impl Iterator<Item = (PointKey, &Point)> {
        self.points.iter()
    }

    /// Get the graph's lines.
    pub fn lines(&self) -> &[GraphLine] {
        &self.lines
    }
}

impl Drawable for Graph {
    fn draw(&self, surface: &mut dyn Surface) {
        for point in self.points.values() {
            point.draw(surface);
        }

        for line in &self.lines {
            let [a, b] = line.ends;
            Line::new(
                self.points[a].loc,
                self.points[b].loc,
                line.width,
                line.stroke.clone(),
            )
            .draw(surface);
        }
    }
}
