use log::trace;

use crate::{Drawable, Surface};

/// The ordered draw buffer for one frame.
///
/// Hosts populate it from simulation state, draw it once, then clear it for
/// the next frame. Shapes draw in insertion order, so later additions layer
/// on top.
#[derive(Default)]
pub struct Scene {
    drawables: Vec<Box<dyn Drawable>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, drawable: impl Drawable + 'static) {
        self.drawables.push(Box::new(drawable))
    }

    pub fn clear(&mut self) {
        self.drawables.clear()
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        trace!("drawing scene of {} shapes", self.drawables.len());

        for drawable in &self.drawables {
            drawable.draw(surface);
        }
    }
}
