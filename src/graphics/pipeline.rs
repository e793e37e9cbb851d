use tracing::error;

use crate::{Driver, Gpu, ShaderError, ShaderStage};

mod builder;
pub use builder::*;

/// Passes the vertex position straight through.
pub const TRIANGLE_VERTEX_SHADER: &str = include_str!("../shader/triangle.vert");
/// Paints every fragment a constant orange.
pub const TRIANGLE_FRAGMENT_SHADER: &str = include_str!("../shader/triangle.frag");

/// A linked GL program.
/// `program` is `None` when any stage failed to compile or the link failed.
/// Drawing with such a pipeline binds no program and renders nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderPipeline<P> {
    pub program: Option<P>,
}
impl<P> RenderPipeline<P> {
    /// A pipeline with no program.
    #[must_use]
    pub const fn invalid() -> Self {
        Self { program: None }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.program.is_some()
    }
}

/// Compile a single shader stage.
/// On failure the driver's diagnostic log is written to the error log, the
/// shader object is deleted, and the log is returned.
/// # Errors
/// Errors with the stage and a non-empty log when the driver rejects the source.
pub fn compile_shader<D: Driver>(
    gpu: &Gpu<D>,
    stage: ShaderStage,
    source: &str,
) -> Result<D::Shader, ShaderError> {
    let shader = gpu
        .create_shader(stage)
        .map_err(|log| ShaderError { stage, log })?;

    gpu.shader_source(shader, source);
    gpu.compile_shader(shader);

    if gpu.shader_compile_status(shader) {
        return Ok(shader);
    }

    let mut log = gpu.shader_info_log(shader);
    if log.trim().is_empty() {
        log = "driver reported a failure without a log".to_owned();
    }
    error!("Shader compilation failed: {}", log.trim_end());
    error!("{} Shader compilation error.", stage);
    gpu.delete_shader(shader);

    Err(ShaderError { stage, log })
}
