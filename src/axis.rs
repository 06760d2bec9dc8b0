use glam::DVec2;

use crate::{Drawable, Surface, BORDER_WIDTH};

/// Length of a short tick mark when the grid is off.
const TICK_LENGTH: f64 = 2.0;

/// Ticks always stroke at width 1, independent of [`BORDER_WIDTH`].
const TICK_WIDTH: f64 = 1.0;

/// Coordinate axes through the origin with tick marks or grid lines.
///
/// `dimensions` are half-extents: each axis runs from the negated dimension to
/// the dimension. Ticks step outward from the origin by `steps` on both sides.
/// With `grid` set, every tick spans the full opposite extent instead of being
/// a short mark.
///
/// Tick geometry is regenerated on every draw, never cached, so the fields can
/// be adjusted between frames and take effect immediately.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    pub dimensions: DVec2,
    pub steps: DVec2,
    pub grid: bool,
    pub axes_color: String,
    pub step_color: String,
}

impl Axis {
    pub fn new(
        dimensions: DVec2,
        steps: DVec2,
        grid: bool,
        axes_color: impl Into<String>,
        step_color: impl Into<String>,
    ) -> Self {
        Self {
            dimensions,
            steps,
            grid,
            axes_color: axes_color.into(),
            step_color: step_color.into(),
        }
    }

    /// The y extent of a vertical tick at distance `x` from the origin.
    fn x_tick_reach(&self) -> f64 {
        if self.grid {
            self.dimensions.y
        } else {
            TICK_LENGTH / 2.0
        }
    }

    fn y_tick_reach(&self) -> f64 {
        if self.grid {
            self.dimensions.x
        } else {
            TICK_LENGTH / 2.0
        }
    }
}

impl Drawable for Axis {
    fn draw(&self, surface: &mut dyn Surface) {
        let dim = self.dimensions;

        // Full-length axis lines through the origin
        surface.begin_path();
        surface.move_to(DVec2::new(-dim.x, 0.0));
        surface.line_to(DVec2::new(dim.x, 0.0));
        surface.move_to(DVec2::new(0.0, -dim.y));
        surface.line_to(DVec2::new(0.0, dim.y));
        surface.stroke(&self.axes_color, BORDER_WIDTH);

        // Tick marks, mirrored into the negative directions.
        // A non-positive step would never reach the extent; skip that axis.
        surface.begin_path();
        if self.steps.x > 0.0 {
            let reach = self.x_tick_reach();
            let mut x = self.steps.x;
            while x <= dim.x {
                for x in [x, -x] {
                    surface.move_to(DVec2::new(x, -reach));
                    surface.line_to(DVec2::new(x, reach));
                }
                x += self.steps.x;
            }
        }
        if self.steps.y > 0.0 {
            let reach = self.y_tick_reach();
            let mut y = self.steps.y;
            while y <= dim.y {
                for y in [y, -y] {
                    surface.move_to(DVec2::new(-reach, y));
                    surface.line_to(DVec2::new(reach, y));
                }
                y += self.steps.y;
            }
        }
        surface.stroke(&self.step_color, TICK_WIDTH);
    }
}
