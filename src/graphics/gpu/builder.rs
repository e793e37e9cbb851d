use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use tracing::debug;
use winit::{event_loop::EventLoop, window::WindowBuilder};

use crate::graphics::{Gpu, GpuError};

/// A window together with its current GL context.
pub type GlWindow = WindowedContext<PossiblyCurrent>;

/// Any symbol every GL version exports. Used to check that the loader works.
const LOADER_CHECK_SYMBOL: &str = "glGetString";

#[derive(Clone, Debug)]
/// Builder for the windowed GL context.
/// These attributes have to be known before the window exists, so they are
/// collected here and applied in one go by [`GpuBuilder::build`].
pub struct GpuBuilder {
    /// Requested OpenGL (major, minor) version. Always a core profile.
    version: (u8, u8),
    /// Whether the default framebuffer is double buffered.
    double_buffer: bool,
    /// Bits of the default framebuffer's depth buffer.
    depth_bits: u8,
    /// Whether buffer swaps wait for vertical sync.
    vsync: bool,
}
impl Default for GpuBuilder {
    fn default() -> Self {
        Self::new()
    }
}
impl GpuBuilder {
    /// Create a `GpuBuilder` asking for a 4.1 core, double buffered context
    /// with a 24 bit depth buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: (4, 1),
            double_buffer: true,
            depth_bits: 24,
            vsync: true,
        }
    }

    pub fn with_version(mut self, major: u8, minor: u8) -> Self {
        self.version = (major, minor);
        self
    }

    pub fn with_double_buffer(mut self, double_buffer: bool) -> Self {
        self.double_buffer = double_buffer;
        self
    }

    pub fn with_depth_bits(mut self, depth_bits: u8) -> Self {
        self.depth_bits = depth_bits;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Open the window, create its context, make it current and load the
    /// GL function table.
    /// # Errors
    /// Errors when any of those steps fail. None of them are retried.
    pub fn build(
        self,
        window: WindowBuilder,
        event_loop: &EventLoop<()>,
    ) -> Result<(GlWindow, Gpu), GpuError> {
        let (major, minor) = self.version;
        debug!(
            "Requesting OpenGL {}.{} core, depth {}, double buffer {}",
            major, minor, self.depth_bits, self.double_buffer
        );

        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, self.version))
            .with_gl_profile(GlProfile::Core)
            .with_double_buffer(Some(self.double_buffer))
            .with_depth_buffer(self.depth_bits)
            .with_vsync(self.vsync)
            .build_windowed(window, event_loop)
            .map_err(|e| GpuError::ContextCreation(e.to_string()))?;

        let context = unsafe { context.make_current() }
            .map_err(|(_, e)| GpuError::ContextCurrent(e.to_string()))?;

        if context.get_proc_address(LOADER_CHECK_SYMBOL).is_null() {
            return Err(GpuError::LoaderNone);
        }
        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| context.get_proc_address(symbol) as *const _)
        };

        Ok((context, Gpu::new(gl)))
    }
}

impl Gpu {
    /// An alias for `GpuBuilder::new()`
    #[must_use]
    pub const fn builder() -> GpuBuilder {
        GpuBuilder::new()
    }
}
