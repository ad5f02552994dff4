//! A yellow rectangle made of two triangles.
//!
//! The rectangle is described by four points and six indices, expanded into
//! six vertices on the CPU and drawn without an index buffer.

use std::sync::Arc;

use crate::abs::{Mesh, ShaderProgram, ShaderSource, build_program};
use crate::config::Config;
use crate::error::AppError;
use crate::geometry::{RECTANGLE_POINTS, RECTANGLE_TRIANGLES, expand_triangles};
use crate::tutorial::Tutorial;
use crate::vertex::PositionVertex;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 pos;
void main()
{
    gl_Position = vec4(pos, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 color;
void main()
{
    color = vec4(1, 1, 0, 1);
}
";

pub struct DrawRectangle {
    program: ShaderProgram,
    mesh: Mesh,
}

impl Tutorial for DrawRectangle {
    const TITLE: &'static str = "Tutorial03";

    fn new(gl: &Arc<glow::Context>, _config: &Config) -> Result<Self, AppError> {
        let program = build_program(
            gl,
            &ShaderSource::vertex(VERTEX_SHADER),
            &ShaderSource::fragment(FRAGMENT_SHADER),
        )?;

        let positions = expand_triangles(&RECTANGLE_POINTS, &RECTANGLE_TRIANGLES);
        let vertices = PositionVertex::from_flat(&positions);
        let mesh = Mesh::from_vertices(gl, &vertices, glow::TRIANGLES)?;
        log::debug!("rectangle expanded to {} vertices", mesh.count());

        Ok(Self { program, mesh })
    }

    fn render(&mut self, _gl: &glow::Context, _elapsed: f32) {
        self.program.use_program();
        self.mesh.draw();
    }
}
