use glam::DVec2;

use crate::{Drawable, Surface, BORDER_WIDTH};

/// Optional fill and stroke colors for a closed shape.
///
/// Each side is independently optional. A style with neither color makes the
/// owning shape invisible: its draw is a complete no-op and not even a path is
/// begun, so placeholder shapes cost nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
}

impl Style {
    pub fn new(fill: Option<String>, stroke: Option<String>) -> Self {
        Self { fill, stroke }
    }

    /// No fill, no stroke: the shape will not be drawn.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            stroke: None,
        }
    }

    pub fn stroke(color: impl Into<String>) -> Self {
        Self {
            fill: None,
            stroke: Some(color.into()),
        }
    }

    pub fn fill_and_stroke(fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self {
            fill: Some(fill.into()),
            stroke: Some(stroke.into()),
        }
    }

    pub fn is_invisible(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }

    /// Fills then strokes the current path, skipping whichever color is
    /// absent. Strokes at [`BORDER_WIDTH`].
    pub(crate) fn paint(&self, surface: &mut dyn Surface) {
        if let Some(fill) = &self.fill {
            surface.fill(fill);
        }
        if let Some(stroke) = &self.stroke {
            surface.stroke(stroke, BORDER_WIDTH);
        }
    }
}

/// An axis-aligned rectangle with top-left corner `loc` and size `dim`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub loc: DVec2,
    pub dim: DVec2,
    pub style: Style,
}

impl Rectangle {
    pub fn new(loc: DVec2, dim: DVec2, style: Style) -> Self {
        Self { loc, dim, style }
    }
}

impl Drawable for Rectangle {
    fn draw(&self, surface: &mut dyn Surface) {
        if self.style.is_invisible() {
            return;
        }
        surface.begin_path();
        surface.rect(self.loc, self.dim);
        self.style.paint(surface);
    }
}

/// A filled and outlined circle marker.
///
/// Unlike [`Rectangle`] and [`Polygon`], both colors are required: a point
/// marker with nothing to paint has no use, so the invisible state is
/// unrepresentable here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub loc: DVec2,
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
}

impl Point {
    pub fn new(loc: DVec2, radius: f64, fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self {
            loc,
            radius,
            fill: fill.into(),
            stroke: stroke.into(),
        }
    }
}

impl Drawable for Point {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.begin_path();
        surface.arc(self.loc, self.radius, 0.0, 2.0 * std::f64::consts::PI);
        surface.fill(&self.fill);
        surface.stroke(&self.stroke, BORDER_WIDTH);
    }
}

/// A straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub start: DVec2,
    pub end: DVec2,
    pub width: f64,
    pub stroke: String,
}

impl Line {
    pub fn new(start: DVec2, end: DVec2, width: f64, stroke: impl Into<String>) -> Self {
        Self {
            start,
            end,
            width,
            stroke: stroke.into(),
        }
    }
}

impl Drawable for Line {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.begin_path();
        surface.move_to(self.start);
        surface.line_to(self.end);
        // Stroked at the line's own width, not BORDER_WIDTH
        surface.stroke(&self.stroke, self.width);
    }
}

/// A closed outline through an ordered point sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub points: Vec<DVec2>,
    pub style: Style,
}

impl Polygon {
    pub fn new(points: Vec<DVec2>, style: Style) -> Self {
        Self { points, style }
    }
}

impl Drawable for Polygon {
    fn draw(&self, surface: &mut dyn Surface) {
        if self.style.is_invisible() {
            return;
        }
        let (first, rest) = match self.points.split_first() {
            Some(split) => split,
            None => return,
        };
        surface.begin_path();
        surface.move_to(*first);
        for point in rest {
            surface.line_to(*point);
        }
        surface.close_path();
        self.style.paint(surface);
    }
}

/// An open stroked path through an ordered point sequence.
///
/// Always drawn: the stroke is mandatory and there is no fill.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    pub points: Vec<DVec2>,
    pub width: f64,
    pub stroke: String,
}

impl Polyline {
    pub fn new(points: Vec<DVec2>, width: f64, stroke: impl Into<String>) -> Self {
        Self {
            points,
            width,
            stroke: stroke.into(),
        }
    }
}

impl Drawable for Polyline {
    fn draw(&self, surface: &mut dyn Surface) {
        let (first, rest) = match self.points.split_first() {
            Some(split) => split,
            None => return,
        };
        surface.begin_path();
        surface.move_to(*first);
        for point in rest {
            surface.line_to(*point);
        }
        surface.stroke(&self.stroke, self.width);
    }
}
