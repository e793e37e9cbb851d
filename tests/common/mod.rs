#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
};

use trigon::{Capability, Driver, InfoString, ShaderStage};

/// Object name handed out by [`FakeDriver`]. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Name(pub u32);

/// Everything the fake driver was asked to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, Name),
    CompileShader(Name),
    DeleteShader(Name),
    CreateProgram(Name),
    AttachShader(Name, Name),
    LinkProgram(Name),
    DeleteProgram(Name),
    UseProgram(Option<Name>),
    CreateVertexArray(Name),
    BindVertexArray(Option<Name>),
    CreateBuffer(Name),
    BindArrayBuffer(Option<Name>),
    ArrayBufferData(usize),
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        location: u32,
        components: i32,
        stride: i32,
        offset: i32,
    },
    Disable(Capability),
    Viewport(i32, i32, i32, i32),
    ClearColor([f32; 4]),
    Clear,
    DrawTriangles(i32, i32),
}

/// A `Driver` that records calls and keeps just enough state to answer
/// queries. A shader "compiles" when it has a `#version` line, a `main`
/// and balanced braces.
#[derive(Default)]
pub struct FakeDriver {
    next_name: Cell<u32>,
    calls: RefCell<Vec<Call>>,
    sources: RefCell<HashMap<Name, String>>,
    compiled: RefCell<HashSet<Name>>,
    live_shaders: RefCell<HashSet<Name>>,
    live_programs: RefCell<HashSet<Name>>,
    bound_buffer: Cell<Option<Name>>,
    buffers: RefCell<HashMap<Name, Vec<u8>>>,
    fail_link: bool,
    fail_vertex_array: bool,
    fail_program: bool,
    silent_compile_errors: bool,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every link reports failure.
    pub fn failing_link() -> Self {
        Self {
            fail_link: true,
            ..Self::default()
        }
    }

    /// Vertex array creation is refused.
    pub fn failing_vertex_array() -> Self {
        Self {
            fail_vertex_array: true,
            ..Self::default()
        }
    }

    /// Program creation is refused.
    pub fn failing_program() -> Self {
        Self {
            fail_program: true,
            ..Self::default()
        }
    }

    /// Compile failures come back with an empty info log.
    pub fn silent_compile_errors() -> Self {
        Self {
            silent_compile_errors: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn buffer_floats(&self, buffer: Name) -> Vec<f32> {
        self.buffers.borrow()[&buffer]
            .chunks_exact(4)
            .map(|bytes| f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            .collect()
    }

    pub fn is_live_shader(&self, shader: Name) -> bool {
        self.live_shaders.borrow().contains(&shader)
    }

    pub fn is_live_program(&self, program: Name) -> bool {
        self.live_programs.borrow().contains(&program)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn name(&self) -> Name {
        let name = self.next_name.get() + 1;
        self.next_name.set(name);
        Name(name)
    }

    fn accepts(source: &str) -> bool {
        source.trim_start().starts_with("#version")
            && source.contains("void main")
            && source.matches('{').count() == source.matches('}').count()
    }
}

impl Driver for FakeDriver {
    type Shader = Name;
    type Program = Name;
    type Buffer = Name;
    type VertexArray = Name;

    fn create_shader(&self, stage: ShaderStage) -> Result<Name, String> {
        let shader = self.name();
        self.live_shaders.borrow_mut().insert(shader);
        self.record(Call::CreateShader(stage, shader));
        Ok(shader)
    }

    fn shader_source(&self, shader: Name, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_owned());
    }

    fn compile_shader(&self, shader: Name) {
        self.record(Call::CompileShader(shader));
        let ok = self
            .sources
            .borrow()
            .get(&shader)
            .map_or(false, |source| Self::accepts(source));
        if ok {
            self.compiled.borrow_mut().insert(shader);
        }
    }

    fn shader_compile_status(&self, shader: Name) -> bool {
        self.compiled.borrow().contains(&shader)
    }

    fn shader_info_log(&self, _shader: Name) -> String {
        if self.silent_compile_errors {
            String::new()
        } else {
            "ERROR: 0:1: syntax error\n".to_owned()
        }
    }

    fn delete_shader(&self, shader: Name) {
        self.live_shaders.borrow_mut().remove(&shader);
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<Name, String> {
        if self.fail_program {
            return Err("out of memory".to_owned());
        }
        let program = self.name();
        self.live_programs.borrow_mut().insert(program);
        self.record(Call::CreateProgram(program));
        Ok(program)
    }

    fn attach_shader(&self, program: Name, shader: Name) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: Name) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: Name) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: Name) -> String {
        "error: no main in vertex stage".to_owned()
    }

    fn delete_program(&self, program: Name) {
        self.live_programs.borrow_mut().remove(&program);
        self.record(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<Name>) {
        self.record(Call::UseProgram(program));
    }

    fn create_vertex_array(&self) -> Result<Name, String> {
        if self.fail_vertex_array {
            return Err("out of memory".to_owned());
        }
        let vertex_array = self.name();
        self.record(Call::CreateVertexArray(vertex_array));
        Ok(vertex_array)
    }

    fn bind_vertex_array(&self, vertex_array: Option<Name>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<Name, String> {
        let buffer = self.name();
        self.buffers.borrow_mut().insert(buffer, Vec::new());
        self.record(Call::CreateBuffer(buffer));
        Ok(buffer)
    }

    fn bind_array_buffer(&self, buffer: Option<Name>) {
        self.bound_buffer.set(buffer);
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_data(&self, data: &[u8]) {
        let bound = self.bound_buffer.get();
        // Uploading to a name that is not a buffer is a GL error; surface it loudly.
        let mut buffers = self.buffers.borrow_mut();
        let target = bound
            .and_then(|name| buffers.get_mut(&name))
            .unwrap_or_else(|| panic!("{:?} is not a buffer", bound));
        *target = data.to_vec();
        self.record(Call::ArrayBufferData(data.len()));
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32, stride: i32, offset: i32) {
        self.record(Call::VertexAttribPointer {
            location,
            components,
            stride,
            offset,
        });
    }

    fn disable(&self, capability: Capability) {
        self.record(Call::Disable(capability));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, color: [f32; 4]) {
        self.record(Call::ClearColor(color));
    }

    fn clear(&self) {
        self.record(Call::Clear);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles(first, count));
    }

    fn get_string(&self, name: InfoString) -> String {
        match name {
            InfoString::Vendor => "Fake Vendor",
            InfoString::Renderer => "Fake Renderer",
            InfoString::Version => "4.1 Fake",
            InfoString::ShadingLanguageVersion => "4.10",
        }
        .to_owned()
    }
}
