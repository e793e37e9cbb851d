mod vertex_layout;
pub use vertex_layout::*;

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use std::{convert::TryFrom, fmt::Debug};

use crate::{Driver, Gpu, GpuError};

/// Position-only vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
}
impl VertexLayout for Vertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute {
        location: 0,
        components: 3,
        offset: 0,
    }];
}

#[rustfmt::skip]
pub const TRIANGLE: [Vertex; 3] = [
    //                  x     y    z
    Vertex { position: [-0.5, -0.5, 0.0] },
    Vertex { position: [ 0.5, -0.5, 0.0] },
    Vertex { position: [ 0.0,  0.5, 0.0] },
];

/// Geometry that lives on the GPU: the vertex array object describing the
/// layout and the buffer holding the bytes.
/// Neither object is deleted; they live as long as the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexBuffer<A, B> {
    pub vertex_array: A,
    pub buffer: B,
    pub vertex_count: i32,
}
impl<A, B> VertexBuffer<A, B>
where
    A: Copy + Debug,
    B: Copy + Debug,
{
    /// Copy `vertices` into a new GPU buffer and record their layout in a new
    /// vertex array object.
    /// # Errors
    /// Errors when the driver cannot create either object, or when there are
    /// more vertices than a single draw call can address.
    pub fn upload<D, V>(gpu: &Gpu<D>, vertices: &[V]) -> Result<Self, GpuError>
    where
        D: Driver<VertexArray = A, Buffer = B>,
        V: VertexLayout,
    {
        let vertex_count = draw_count(vertices.len())?;

        let vertex_array = gpu
            .create_vertex_array()
            .map_err(|message| GpuError::ResourceCreation {
                kind: "vertex array",
                message,
            })?;
        gpu.bind_vertex_array(Some(vertex_array));

        let buffer = gpu
            .create_buffer()
            .map_err(|message| GpuError::ResourceCreation {
                kind: "vertex buffer",
                message,
            })?;
        gpu.bind_array_buffer(Some(buffer));
        gpu.array_buffer_data(bytemuck::cast_slice(vertices));

        for attribute in V::ATTRIBUTES {
            gpu.enable_vertex_attrib_array(attribute.location);
            gpu.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.components,
                V::STRIDE,
                attribute.offset,
            );
        }

        // The vertex array keeps the attribute state, so it can be left now.
        gpu.bind_vertex_array(None);

        debug!(
            "Uploaded {} vertices ({} bytes) to buffer {:?}, vertex array {:?}",
            vertices.len(),
            std::mem::size_of_val(vertices),
            buffer,
            vertex_array
        );

        Ok(Self {
            vertex_array,
            buffer,
            vertex_count,
        })
    }

    /// Upload the built-in [`TRIANGLE`].
    /// # Errors
    /// See [`VertexBuffer::upload`].
    pub fn triangle<D>(gpu: &Gpu<D>) -> Result<Self, GpuError>
    where
        D: Driver<VertexArray = A, Buffer = B>,
    {
        Self::upload(gpu, &TRIANGLE)
    }
}

/// Draw calls take a signed count.
fn draw_count(len: usize) -> Result<i32, GpuError> {
    i32::try_from(len).map_err(|_| GpuError::ResourceCreation {
        kind: "vertex buffer",
        message: format!("{} vertices do not fit in one draw call", len),
    })
}
