use glam::DVec2;

use crate::{Drawable, Surface};

/// Angle between the shaft and each head wing, in radians.
const HEAD_ANGLE: f64 = std::f64::consts::PI / 8.0;

/// A stroked segment with an open two-wing head at its end.
///
/// The head geometry is a construction-time snapshot computed from `start`,
/// `end` and `head_size`; moving the endpoints afterwards does not recompute
/// it. A zero-length arrow keeps the `atan2(0, 0) = 0` convention, so the
/// head still draws, pointing along +x — defined, but arbitrary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrow {
    pub start: DVec2,
    pub end: DVec2,
    pub width: f64,
    pub stroke: String,
    head_left: DVec2,
    head_right: DVec2,
    head_size: f64,
}

impl Arrow {
    pub fn new(
        start: DVec2,
        end: DVec2,
        width: f64,
        stroke: impl Into<String>,
        head_size: f64,
    ) -> Self {
        let line_angle = f64::atan2(end.y - start.y, end.x - start.x);
        let wing = |angle: f64| end - DVec2::new(f64::cos(angle), f64::sin(angle)) * head_size;

        Self {
            start,
            end,
            width,
            stroke: stroke.into(),
            head_left: wing(line_angle - HEAD_ANGLE),
            head_right: wing(line_angle + HEAD_ANGLE),
            head_size,
        }
    }

    /// Get the arrow's left head wing endpoint.
    pub fn head_left(&self) -> DVec2 {
        self.head_left
    }

    /// Get the arrow's right head wing endpoint.
    pub fn head_right(&self) -> DVec2 {
        self.head_right
    }

    /// Get the arrow's head size.
    pub fn head_size(&self) -> f64 {
        self.head_size
    }
}

impl Drawable for Arrow {
    fn draw(&self, surface: &mut dyn Surface) {
        // Shaft and head are one continuous path, stroked once
        surface.begin_path();
        surface.move_to(self.start);
        surface.line_to(self.end);
        surface.move_to(self.head_left);
        surface.line_to(self.end);
        surface.line_to(self.head_right);
        surface.stroke(&self.stroke, self.width);
    }
}
