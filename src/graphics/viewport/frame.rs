use crate::{Driver, Gpu, RenderPipeline, VertexBuffer};

/// A cleared frame that is ready to be drawn to.
/// Presenting it is up to whoever owns the window.
pub struct Frame<'a, D> {
    pub(crate) gpu: &'a Gpu<D>,
}

impl<D: Driver> Frame<'_, D> {
    /// Draw `geometry` as a triangle list with `pipeline`.
    pub fn draw(
        &mut self,
        pipeline: &RenderPipeline<D::Program>,
        geometry: &VertexBuffer<D::VertexArray, D::Buffer>,
    ) {
        let gpu = self.gpu;
        gpu.use_program(pipeline.program);

        gpu.bind_vertex_array(Some(geometry.vertex_array));
        gpu.bind_array_buffer(Some(geometry.buffer));
        gpu.draw_triangles(0, geometry.vertex_count);

        gpu.use_program(None);
    }
}
