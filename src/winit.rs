use tracing::{info, warn};
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    platform::run_return::EventLoopExtRunReturn,
    window::WindowBuilder,
};

use crate::{Frame, GlWindow, Gpu, GpuBuilder, GpuError, Viewport};

mod input;
pub use input::*;

/// A window, gpu, and viewport all in one
pub struct Program {
    pub event_loop: EventLoop<()>,
    pub window: GlWindow,
    pub gpu: Gpu,
    pub viewport: Viewport,
}

impl Program {
    pub fn builder(title: &str) -> ProgramBuilder {
        ProgramBuilder::new().with_title(title)
    }

    /// Run the frame loop until the window is asked to close.
    ///
    /// Each iteration drains every pending event, then clears a frame, hands
    /// it to `op` and presents it. The window is destroyed when this returns.
    pub fn run_draw<F>(self, mut op: F)
    where
        F: FnMut(&mut Frame<'_, glow::Context>),
    {
        let Program {
            mut event_loop,
            window,
            gpu,
            viewport,
        } = self;
        let mut input = Input::default();

        event_loop.run_return(|event, _, control_flow| {
            let step = input.step(&event);
            *control_flow = step.control_flow();

            if step == Step::Draw {
                let mut frame = viewport.begin_frame(&gpu);
                op(&mut frame);

                if let Err(e) = window.swap_buffers() {
                    // Rudimentary error handling. Just logs and continues
                    warn!("Could not present frame: {}", e);
                }
            }
        });

        info!("Window closed, shutting down");
    }
}

pub struct ProgramBuilder {
    pub window: WindowBuilder,
    pub gpu: GpuBuilder,
    pub viewport: Viewport,
}
impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBuilder {
    /// A 640x480 fixed-size window with a 4.1 core context.
    #[must_use]
    pub fn new() -> Self {
        let viewport = Viewport::default();
        Self {
            window: WindowBuilder::new()
                .with_title("Graphic Window")
                .with_inner_size(PhysicalSize::new(viewport.width, viewport.height))
                .with_resizable(false),
            gpu: Gpu::builder(),
            viewport,
        }
    }

    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.window = self.window.with_title(title);
        self
    }

    /// Sets the window's drawable size in physical pixels. The viewport
    /// follows.
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        self.window = self.window.with_inner_size(PhysicalSize::new(width, height));
        self.viewport.width = width;
        self.viewport.height = height;
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.viewport = self.viewport.with_clear_color(clear_color);
        self
    }

    pub fn with_gl_version(mut self, major: u8, minor: u8) -> Self {
        self.gpu = self.gpu.with_version(major, minor);
        self
    }

    pub fn with_depth_bits(mut self, depth_bits: u8) -> Self {
        self.gpu = self.gpu.with_depth_bits(depth_bits);
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.gpu = self.gpu.with_vsync(vsync);
        self
    }

    /// # Errors
    /// Errors when the window, context or loader could not be set up.
    pub fn build(self) -> Result<Program, GpuError> {
        let event_loop = EventLoop::new();
        let (window, gpu) = self.gpu.build(self.window, &event_loop)?;
        gpu.log_info();

        Ok(Program {
            event_loop,
            window,
            gpu,
            viewport: self.viewport,
        })
    }
}
