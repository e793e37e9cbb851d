#[cfg(feature = "window")]
mod builder;
#[cfg(feature = "window")]
pub use builder::*;

use glow::HasContext;
use std::{fmt::Debug, ops::Deref};

type GlShader = <glow::Context as HasContext>::Shader;
type GlProgram = <glow::Context as HasContext>::Program;
type GlBuffer = <glow::Context as HasContext>::Buffer;
type GlVertexArray = <glow::Context as HasContext>::VertexArray;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}
impl ShaderStage {
    #[must_use]
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}
impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("Vertex"),
            ShaderStage::Fragment => f.write_str("Fragment"),
        }
    }
}

/// Fixed-function state the frame loop toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    DepthTest,
    CullFace,
}

/// Driver identification strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoString {
    Vendor,
    Renderer,
    Version,
    ShadingLanguageVersion,
}

/// The GL entry points this crate calls.
///
/// Implemented for [`glow::Context`]. Every method assumes the context it was
/// loaded from is current on the calling thread; [`GpuBuilder`] guarantees
/// that for the windowed program.
///
/// Object handles are the driver's own types, as with [`glow::HasContext`].
/// Creation mirrors the loader: `Ok` carries a live object, `Err` carries the
/// driver's message. "No object" is `None` wherever a binding accepts it.
pub trait Driver {
    type Shader: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type Buffer: Copy + Debug + PartialEq;
    type VertexArray: Copy + Debug + PartialEq;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    /// `None` unbinds the current program.
    fn use_program(&self, program: Option<Self::Program>);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    /// `None` unbinds the current vertex array.
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads to the buffer bound to `ARRAY_BUFFER` with `STATIC_DRAW` usage.
    fn array_buffer_data(&self, data: &[u8]);
    fn enable_vertex_attrib_array(&self, location: u32);
    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32, stride: i32, offset: i32);

    fn disable(&self, capability: Capability);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, color: [f32; 4]);
    /// Clears both the colour and depth buffers.
    fn clear(&self);
    fn draw_triangles(&self, first: i32, count: i32);

    fn get_string(&self, name: InfoString) -> String;
}

// `HasContext` uses the same method and type names, so calls and types are
// spelled out in full here.
impl Driver for glow::Context {
    type Shader = GlShader;
    type Program = GlProgram;
    type Buffer = GlBuffer;
    type VertexArray = GlVertexArray;

    fn create_shader(&self, stage: ShaderStage) -> Result<GlShader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: GlShader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: GlShader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: GlShader) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn shader_info_log(&self, shader: GlShader) -> String {
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: GlShader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<GlProgram, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: GlProgram, shader: GlShader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: GlProgram) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: GlProgram) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn program_info_log(&self, program: GlProgram) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn delete_program(&self, program: GlProgram) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<GlProgram>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn create_vertex_array(&self) -> Result<GlVertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<GlVertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn create_buffer(&self) -> Result<GlBuffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_array_buffer(&self, buffer: Option<GlBuffer>) {
        unsafe { HasContext::bind_buffer(self, glow::ARRAY_BUFFER, buffer) }
    }

    fn array_buffer_data(&self, data: &[u8]) {
        unsafe {
            HasContext::buffer_data_u8_slice(self, glow::ARRAY_BUFFER, data, glow::STATIC_DRAW)
        }
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, location) }
    }

    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32, stride: i32, offset: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                location,
                components,
                glow::FLOAT,
                false,
                stride,
                offset,
            )
        }
    }

    fn disable(&self, capability: Capability) {
        let cap = match capability {
            Capability::DepthTest => glow::DEPTH_TEST,
            Capability::CullFace => glow::CULL_FACE,
        };
        unsafe { HasContext::disable(self, cap) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear(&self) {
        unsafe { HasContext::clear(self, glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, glow::TRIANGLES, first, count) }
    }

    fn get_string(&self, name: InfoString) -> String {
        let parameter = match name {
            InfoString::Vendor => glow::VENDOR,
            InfoString::Renderer => glow::RENDERER,
            InfoString::Version => glow::VERSION,
            InfoString::ShadingLanguageVersion => glow::SHADING_LANGUAGE_VERSION,
        };
        unsafe { HasContext::get_parameter_string(self, parameter) }
    }
}

/// Identification strings reported by the driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language: String,
}

/// The GPU context which owns the loaded driver.
/// Everything that talks to the GPU borrows this instead of reaching for
/// global state.
pub struct Gpu<D = glow::Context> {
    driver: D,
}
impl<D: Driver> Gpu<D> {
    /// Wrap an already-loaded driver. The windowed program uses [`GpuBuilder`].
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    #[must_use]
    pub fn info(&self) -> GlInfo {
        GlInfo {
            vendor: self.get_string(InfoString::Vendor),
            renderer: self.get_string(InfoString::Renderer),
            version: self.get_string(InfoString::Version),
            shading_language: self.get_string(InfoString::ShadingLanguageVersion),
        }
    }

    /// Writes [`Gpu::info`] to the log.
    pub fn log_info(&self) {
        let info = self.info();
        tracing::info!("Vendor: {}", info.vendor);
        tracing::info!("Renderer: {}", info.renderer);
        tracing::info!("Version: {}", info.version);
        tracing::info!("Shading Language: {}", info.shading_language);
    }
}
impl<D> Deref for Gpu<D> {
    type Target = D;
    fn deref(&self) -> &Self::Target {
        &self.driver
    }
}
