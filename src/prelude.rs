pub use crate::{
    BoxError, Driver, Frame, Gpu, GpuError, RenderPipeline, ShaderStage, Vertex,
    VertexBuffer, VertexLayout, Viewport,
};

#[cfg(feature = "window")]
pub use crate::{Program, ProgramBuilder};
