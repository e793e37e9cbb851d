mod frame;
pub use frame::*;

use crate::{Capability, Driver, Gpu};

/// A `Viewport` is the rectangle of the default framebuffer that is cleared
/// and drawn to each frame.
/// It has a fixed size: the window is not expected to resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub clear_color: [f32; 4],
}
impl Default for Viewport {
    fn default() -> Self {
        Self::new(640, 480)
    }
}
impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clear_color: [0.2, 0.3, 0.3, 1.0],
        }
    }

    #[must_use]
    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Reset the per-frame state and clear colour and depth.
    pub fn begin_frame<'a, D: Driver>(&self, gpu: &'a Gpu<D>) -> Frame<'a, D> {
        gpu.disable(Capability::DepthTest);
        gpu.disable(Capability::CullFace);

        gpu.viewport(0, 0, self.width as i32, self.height as i32);
        gpu.clear_color(self.clear_color);
        gpu.clear();

        Frame { gpu }
    }
}
