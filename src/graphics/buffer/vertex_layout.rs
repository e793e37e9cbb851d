/// One shader input slot fed from the bound array buffer.
/// Components are always `f32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader location (`layout(location = N)` or the linker's index).
    pub location: u32,
    /// Number of floats, 1 to 4.
    pub components: i32,
    /// Byte offset of the attribute inside one vertex.
    pub offset: i32,
}

/// Describes how the bytes of a vertex type map to shader inputs.
pub trait VertexLayout: bytemuck::Pod {
    const ATTRIBUTES: &'static [VertexAttribute];

    /// Byte distance between consecutive vertices.
    /// `0` tells GL the attributes are tightly packed.
    const STRIDE: i32 = 0;
}
