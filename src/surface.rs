use glam::DVec2;

/// An abstract 2D raster drawing target.
///
/// Shapes are converted into these primitive operations and nothing else; the
/// host decides what backs them (an HTML canvas, a GPU tessellator, a command
/// buffer). Coordinates are in the surface's own space, no unit conversion is
/// performed by this crate.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    /// A circular arc around `center`, from `start_angle` to `end_angle` in
    /// radians.
    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64);
    /// An axis-aligned rectangle subpath with top-left `loc` and size `dim`.
    fn rect(&mut self, loc: DVec2, dim: DVec2);
    fn close_path(&mut self);
    /// Fills the current path with the given color.
    fn fill(&mut self, color: &str);
    /// Strokes the current path with the given color and line width.
    fn stroke(&mut self, color: &str, width: f64);
}

/// The capability every renderable shape implements: convert itself into
/// primitive operations on a surface.
///
/// Drawing has no return value and no effect other than the issued calls.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// One primitive surface operation, mirroring [`Surface`] call for call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Rect {
        loc: DVec2,
        dim: DVec2,
    },
    ClosePath,
    Fill(String),
    Stroke(String, f64),
}

/// A [`Surface`] that records every call instead of painting.
///
/// Hosts use it to batch a frame into a replayable command list; the test
/// suite uses it to assert exact call sequences.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear()
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Surface for Recorder {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath)
    }

    fn move_to(&mut self, p: DVec2) {
        self.commands.push(DrawCommand::MoveTo(p))
    }

    fn line_to(&mut self, p: DVec2) {
        self.commands.push(DrawCommand::LineTo(p))
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }

    fn rect(&mut self, loc: DVec2, dim: DVec2) {
        self.commands.push(DrawCommand::Rect { loc, dim })
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath)
    }

    fn fill(&mut self, color: &str) {
        self.commands.push(DrawCommand::Fill(color.to_owned()))
    }

    fn stroke(&mut self, color: &str, width: f64) {
        self.commands.push(DrawCommand::Stroke(color.to_owned(), width))
    }
}
