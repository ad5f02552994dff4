//! OpenGL Shaders
//!
//! This module builds linked shader programs out of a vertex and a fragment
//! stage. Sources come either from string literals or from files on disk
//! ([`ShaderSource`]), compilation and linking go through the
//! [`ShaderBackend`] trait, and the result is a [`ShaderProgram`] that owns the
//! program object until it is deleted or dropped.
//!
//! [`glow::Context`] is the backend used by the tutorials.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use glam::{Mat4, Vec4};
use glow::HasContext;

use crate::error::ShaderError;

/// The pipeline stage a shader source is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The matching OpenGL shader type enum.
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// GLSL source text tagged with the stage it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    stage: ShaderStage,
    text: String,
}

impl ShaderSource {
    /// Wraps source text supplied in memory.
    pub fn new(stage: ShaderStage, text: impl Into<String>) -> Self {
        Self {
            stage,
            text: text.into(),
        }
    }

    /// Shorthand for a vertex stage source.
    pub fn vertex(text: impl Into<String>) -> Self {
        Self::new(ShaderStage::Vertex, text)
    }

    /// Shorthand for a fragment stage source.
    pub fn fragment(text: impl Into<String>) -> Self {
        Self::new(ShaderStage::Fragment, text)
    }

    /// Reads the whole file at `path`. Relative paths resolve against the
    /// current working directory.
    pub fn from_file(stage: ShaderStage, path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                log::debug!("read {stage} shader source from {}", path.display());
                Ok(Self::new(stage, text))
            }
            Err(source) => {
                let err = ShaderError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                log::error!("{err}");
                Err(err)
            }
        }
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The calls the program builder needs from a graphics driver.
pub trait ShaderBackend {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// Uploads `source` into `shader` and compiles it. Returns the compile status.
    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Links `program`. Returns the link status.
    fn link_program(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);
}

impl ShaderBackend for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn compile_shader(&self, shader: glow::Shader, source: &str) -> bool {
        unsafe {
            self.shader_source(shader, source);
            HasContext::compile_shader(self, shader);
            self.get_shader_compile_status(shader)
        }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) -> bool {
        unsafe {
            HasContext::link_program(self, program);
            self.get_program_link_status(program)
        }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }
}

/// A successfully compiled stage. Deleted when dropped.
struct CompiledStage<'a, B: ShaderBackend> {
    gl: &'a B,
    id: B::Shader,
}

impl<'a, B: ShaderBackend> CompiledStage<'a, B> {
    fn compile(gl: &'a B, source: &ShaderSource) -> Result<Self, ShaderError> {
        let stage = source.stage();
        let id = gl.create_shader(stage).map_err(ShaderError::Backend)?;

        if !gl.compile_shader(id, source.text()) {
            let log = gl.shader_info_log(id);
            gl.delete_shader(id);
            log::error!("{stage} shader failed to compile\n{log}");
            return Err(ShaderError::Compile { stage, log });
        }

        log::debug!("compiled {stage} shader {id:?}");
        Ok(Self { gl, id })
    }
}

impl<B: ShaderBackend> Drop for CompiledStage<'_, B> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

/// Compiles both stages and links them into a program.
///
/// A stage that fails to compile aborts the build before linking. Both stage
/// objects are detached and deleted once linking has run, whatever its
/// outcome, and a program that fails to link is deleted too.
pub fn build_program<B: ShaderBackend>(
    gl: &Arc<B>,
    vertex: &ShaderSource,
    fragment: &ShaderSource,
) -> Result<ShaderProgram<B>, ShaderError> {
    debug_assert_eq!(vertex.stage(), ShaderStage::Vertex);
    debug_assert_eq!(fragment.stage(), ShaderStage::Fragment);

    let backend: &B = gl;
    let vertex = CompiledStage::compile(backend, vertex)?;
    let fragment = CompiledStage::compile(backend, fragment)?;

    let program = backend.create_program().map_err(ShaderError::Backend)?;
    for stage in [&vertex, &fragment] {
        backend.attach_shader(program, stage.id);
    }

    let linked = backend.link_program(program);

    for stage in [&vertex, &fragment] {
        backend.detach_shader(program, stage.id);
    }
    drop(vertex);
    drop(fragment);

    if !linked {
        let log = backend.program_info_log(program);
        backend.delete_program(program);
        log::error!("shader program failed to link\n{log}");
        return Err(ShaderError::Link { log });
    }

    log::debug!("linked shader program {program:?}");
    Ok(ShaderProgram {
        gl: Arc::clone(gl),
        id: Some(program),
    })
}

/// Reads both stage sources from disk, then behaves like [`build_program`].
///
/// Nothing is sent to the backend unless both files were read.
pub fn build_program_from_files<B: ShaderBackend>(
    gl: &Arc<B>,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> Result<ShaderProgram<B>, ShaderError> {
    let vertex = ShaderSource::from_file(ShaderStage::Vertex, vertex_path)?;
    let fragment = ShaderSource::from_file(ShaderStage::Fragment, fragment_path)?;
    build_program(gl, &vertex, &fragment)
}

/// A value that can be written to a uniform variable.
pub trait Uniform {
    /// Writes the value to `location` of the currently bound program.
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self) }
    }
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_f32(Some(location), *self) }
    }
}

impl Uniform for Vec4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_4_f32(Some(location), self.x, self.y, self.z, self.w) }
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref()) }
    }
}

/// A linked shader program.
///
/// The program object is released by [`ShaderProgram::delete`] or on drop,
/// exactly once.
pub struct ShaderProgram<B: ShaderBackend = glow::Context> {
    gl: Arc<B>,
    id: Option<B::Program>,
}

impl<B: ShaderBackend> ShaderProgram<B> {
    /// The program handle, or `None` once deleted.
    pub fn id(&self) -> Option<B::Program> {
        self.id
    }

    /// Binds the program for subsequent draw calls.
    pub fn use_program(&self) {
        if let Some(id) = self.id {
            self.gl.use_program(Some(id));
        }
    }

    /// Releases the program object. Further calls do nothing.
    pub fn delete(&mut self) {
        if let Some(id) = self.id.take() {
            self.gl.delete_program(id);
            log::debug!("deleted shader program {id:?}");
        }
    }
}

impl ShaderProgram<glow::Context> {
    /// Sets a uniform on this program. The program must be bound with
    /// [`ShaderProgram::use_program`] first. Unknown names are ignored.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        let Some(id) = self.id else {
            return;
        };
        let location = unsafe { self.gl.get_uniform_location(id, name) };
        if let Some(location) = location {
            value.set_uniform(&self.gl, &location);
        }
    }
}

impl<B: ShaderBackend> Drop for ShaderProgram<B> {
    fn drop(&mut self) {
        self.delete();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    use super::*;

    const VERTEX: &str = "#version 330 core\nlayout (location = 0) in vec3 pos;\nvoid main() { gl_Position = vec4(pos, 1.0); }\n";
    const FRAGMENT: &str = "#version 330 core\nout vec4 color;\nvoid main() { color = vec4(1.0); }\n";
    const SYNTAX_ERROR_LOG: &str = "0:3(1): error: syntax error, unexpected '}'";

    #[derive(Default)]
    struct State {
        next_id: u32,
        shader_stages: HashMap<u32, ShaderStage>,
        live_shaders: HashSet<u32>,
        deleted_shaders: Vec<u32>,
        live_programs: HashSet<u32>,
        attached: HashSet<(u32, u32)>,
        compile_calls: usize,
        program_deletes: usize,
        use_calls: usize,
    }

    /// In-memory driver that records every call.
    #[derive(Default)]
    struct RecordingBackend {
        state: RefCell<State>,
        failing_stage: Option<ShaderStage>,
        link_error: Option<&'static str>,
    }

    impl RecordingBackend {
        fn failing_compile(stage: ShaderStage) -> Self {
            Self {
                failing_stage: Some(stage),
                ..Default::default()
            }
        }

        fn failing_link(log: &'static str) -> Self {
            Self {
                link_error: Some(log),
                ..Default::default()
            }
        }

        fn next_id(&self) -> u32 {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            state.next_id
        }
    }

    impl ShaderBackend for RecordingBackend {
        type Shader = u32;
        type Program = u32;

        fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
            let id = self.next_id();
            let mut state = self.state.borrow_mut();
            state.shader_stages.insert(id, stage);
            state.live_shaders.insert(id);
            Ok(id)
        }

        fn compile_shader(&self, shader: u32, _source: &str) -> bool {
            let mut state = self.state.borrow_mut();
            state.compile_calls += 1;
            Some(state.shader_stages[&shader]) != self.failing_stage
        }

        fn shader_info_log(&self, shader: u32) -> String {
            let state = self.state.borrow();
            if Some(state.shader_stages[&shader]) == self.failing_stage {
                SYNTAX_ERROR_LOG.to_string()
            } else {
                String::new()
            }
        }

        fn delete_shader(&self, shader: u32) {
            let mut state = self.state.borrow_mut();
            assert!(state.live_shaders.remove(&shader), "shader {shader} deleted twice");
            state.deleted_shaders.push(shader);
        }

        fn create_program(&self) -> Result<u32, String> {
            let id = self.next_id();
            self.state.borrow_mut().live_programs.insert(id);
            Ok(id)
        }

        fn attach_shader(&self, program: u32, shader: u32) {
            self.state.borrow_mut().attached.insert((program, shader));
        }

        fn detach_shader(&self, program: u32, shader: u32) {
            self.state.borrow_mut().attached.remove(&(program, shader));
        }

        fn link_program(&self, _program: u32) -> bool {
            self.link_error.is_none()
        }

        fn program_info_log(&self, _program: u32) -> String {
            self.link_error.unwrap_or_default().to_string()
        }

        fn use_program(&self, _program: Option<u32>) {
            self.state.borrow_mut().use_calls += 1;
        }

        fn delete_program(&self, program: u32) {
            let mut state = self.state.borrow_mut();
            state.live_programs.remove(&program);
            state.program_deletes += 1;
        }
    }

    #[test]
    fn test_valid_sources_link_and_stages_are_deleted() {
        let gl = Arc::new(RecordingBackend::default());
        let program = build_program(
            &gl,
            &ShaderSource::vertex(VERTEX),
            &ShaderSource::fragment(FRAGMENT),
        )
        .unwrap();

        let id = program.id().unwrap();
        assert_ne!(id, 0);

        let state = gl.state.borrow();
        assert!(state.live_shaders.is_empty());
        assert_eq!(state.deleted_shaders.len(), 2);
        assert!(state.attached.is_empty());
        assert!(state.live_programs.contains(&id));
    }

    #[test]
    fn test_vertex_syntax_error_reports_log_and_skips_link() {
        let gl = Arc::new(RecordingBackend::failing_compile(ShaderStage::Vertex));
        let result = build_program(
            &gl,
            &ShaderSource::vertex("#version 330 core\nvoid main( {\n}"),
            &ShaderSource::fragment(FRAGMENT),
        );

        let err = result.err().unwrap();
        match &err {
            ShaderError::Compile { stage, log } => {
                assert_eq!(*stage, ShaderStage::Vertex);
                assert!(!log.is_empty());
                assert!(log.contains("syntax error"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("vertex shader failed to compile"));

        let state = gl.state.borrow();
        assert_eq!(state.compile_calls, 1);
        assert!(state.live_programs.is_empty());
        assert!(state.live_shaders.is_empty());
    }

    #[test]
    fn test_fragment_failure_deletes_compiled_vertex_stage() {
        let gl = Arc::new(RecordingBackend::failing_compile(ShaderStage::Fragment));
        let result = build_program(
            &gl,
            &ShaderSource::vertex(VERTEX),
            &ShaderSource::fragment("not glsl"),
        );

        assert!(matches!(
            result,
            Err(ShaderError::Compile {
                stage: ShaderStage::Fragment,
                ..
            })
        ));
        let state = gl.state.borrow();
        assert_eq!(state.compile_calls, 2);
        assert!(state.live_shaders.is_empty());
        assert_eq!(state.deleted_shaders.len(), 2);
        assert!(state.live_programs.is_empty());
    }

    #[test]
    fn test_link_failure_releases_everything() {
        let gl = Arc::new(RecordingBackend::failing_link(
            "error: vertex shader output `color' not read by fragment shader",
        ));
        let result = build_program(
            &gl,
            &ShaderSource::vertex(VERTEX),
            &ShaderSource::fragment(FRAGMENT),
        );

        match result {
            Err(ShaderError::Link { log }) => assert!(log.contains("not read")),
            _ => panic!("expected a link error"),
        }
        let state = gl.state.borrow();
        assert!(state.live_shaders.is_empty());
        assert!(state.attached.is_empty());
        assert!(state.live_programs.is_empty());
        assert_eq!(state.program_deletes, 1);
    }

    #[test]
    fn test_missing_file_fails_before_any_compile() {
        let gl = Arc::new(RecordingBackend::default());
        let result = build_program_from_files(
            &gl,
            "shaders/does_not_exist.vert",
            "shaders/does_not_exist.frag",
        );

        match result {
            Err(ShaderError::Io { path, .. }) => {
                assert_eq!(path, Path::new("shaders/does_not_exist.vert"));
            }
            _ => panic!("expected an io error"),
        }
        let state = gl.state.borrow();
        assert_eq!(state.compile_calls, 0);
        assert_eq!(state.next_id, 0);
    }

    #[test]
    fn test_build_from_files() {
        let dir = std::env::temp_dir().join(format!("learnogl-shader-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let vertex_path = dir.join("static.vert");
        let fragment_path = dir.join("static.frag");
        std::fs::write(&vertex_path, VERTEX).unwrap();
        std::fs::write(&fragment_path, FRAGMENT).unwrap();

        let gl = Arc::new(RecordingBackend::default());
        let program = build_program_from_files(&gl, &vertex_path, &fragment_path).unwrap();
        assert!(program.id().is_some());
        assert_eq!(gl.state.borrow().compile_calls, 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_double_delete_is_a_no_op() {
        let gl = Arc::new(RecordingBackend::default());
        let mut program = build_program(
            &gl,
            &ShaderSource::vertex(VERTEX),
            &ShaderSource::fragment(FRAGMENT),
        )
        .unwrap();

        program.use_program();
        program.delete();
        program.delete();
        program.use_program();
        assert_eq!(program.id(), None);
        drop(program);

        let state = gl.state.borrow();
        assert_eq!(state.program_deletes, 1);
        assert_eq!(state.use_calls, 1);
        assert!(state.live_programs.is_empty());
    }

    #[test]
    fn test_drop_releases_program() {
        let gl = Arc::new(RecordingBackend::default());
        {
            let _program = build_program(
                &gl,
                &ShaderSource::vertex(VERTEX),
                &ShaderSource::fragment(FRAGMENT),
            )
            .unwrap();
        }
        assert!(gl.state.borrow().live_programs.is_empty());
        assert_eq!(gl.state.borrow().program_deletes, 1);
    }

    #[test]
    fn test_source_tags() {
        assert_eq!(ShaderSource::vertex(VERTEX).stage(), ShaderStage::Vertex);
        assert_eq!(ShaderSource::fragment(FRAGMENT).stage(), ShaderStage::Fragment);
        assert_eq!(ShaderStage::Vertex.gl_enum(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
