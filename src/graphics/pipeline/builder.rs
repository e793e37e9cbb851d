use tracing::{debug, error};

use crate::{compile_shader, Driver, Gpu, RenderPipeline, ShaderStage};

use super::{TRIANGLE_FRAGMENT_SHADER, TRIANGLE_VERTEX_SHADER};

pub struct PipelineBuilder<'a, D> {
    /// Handle to the Gpu
    gpu: &'a Gpu<D>,
    label: &'a str,
    /// GLSL source for the vertex shader
    vertex: &'a str,
    /// GLSL source for the fragment shader
    fragment: &'a str,
}
impl<'a, D: Driver> PipelineBuilder<'a, D> {
    /// Starts from the built-in triangle shaders.
    pub fn new(gpu: &'a Gpu<D>, label: &'a str) -> Self {
        Self {
            gpu,
            label,
            vertex: TRIANGLE_VERTEX_SHADER,
            fragment: TRIANGLE_FRAGMENT_SHADER,
        }
    }

    pub fn with_vertex(mut self, source: &'a str) -> Self {
        self.vertex = source;
        self
    }

    pub fn with_fragment(mut self, source: &'a str) -> Self {
        self.fragment = source;
        self
    }

    /// Compile both stages and link them.
    /// Failures are logged, never returned: the resulting pipeline simply
    /// carries no program.
    #[must_use]
    pub fn create(self) -> RenderPipeline<D::Program> {
        let gpu = self.gpu;

        let program = match gpu.create_program() {
            Ok(program) => program,
            Err(e) => {
                error!("Pipeline '{}': could not create program: {}", self.label, e);
                return RenderPipeline::invalid();
            }
        };

        let vertex = compile_shader(gpu, ShaderStage::Vertex, self.vertex);
        let fragment = compile_shader(gpu, ShaderStage::Fragment, self.fragment);

        let (vertex, fragment) = match (vertex, fragment) {
            (Ok(vertex), Ok(fragment)) => (vertex, fragment),
            (vertex, fragment) => {
                error!(
                    "Pipeline '{}' has a stage that did not compile, drawing without a program",
                    self.label
                );
                // Only stages that compiled are still alive.
                for shader in vertex.into_iter().chain(fragment) {
                    gpu.delete_shader(shader);
                }
                gpu.delete_program(program);
                return RenderPipeline::invalid();
            }
        };

        gpu.attach_shader(program, vertex);
        gpu.attach_shader(program, fragment);
        gpu.link_program(program);

        if !gpu.program_link_status(program) {
            error!(
                "Pipeline '{}': program link failed: {}",
                self.label,
                gpu.program_info_log(program).trim_end()
            );
            gpu.delete_program(program);
            return RenderPipeline::invalid();
        }

        debug!("Pipeline '{}' linked as program {:?}", self.label, program);
        RenderPipeline {
            program: Some(program),
        }
    }
}

impl<D: Driver> Gpu<D> {
    pub fn new_pipeline<'a>(&'a self, label: &'a str) -> PipelineBuilder<'a, D> {
        PipelineBuilder::new(self, label)
    }
}
