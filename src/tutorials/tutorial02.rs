//! A single orange triangle drawn without an index buffer.
//!
//! The shaders are compiled from string literals.

use std::sync::Arc;

use crate::abs::{Mesh, ShaderProgram, ShaderSource, build_program};
use crate::config::Config;
use crate::error::AppError;
use crate::geometry::TRIANGLE_POINTS;
use crate::tutorial::Tutorial;
use crate::vertex::PositionVertex;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 pos;
void main()
{
    gl_Position = vec4(pos.x, pos.y, pos.z, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 frag_color;
void main()
{
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}
";

pub struct DrawTriangle {
    program: ShaderProgram,
    mesh: Mesh,
}

impl Tutorial for DrawTriangle {
    const TITLE: &'static str = "Tutorial02";

    fn new(gl: &Arc<glow::Context>, _config: &Config) -> Result<Self, AppError> {
        let program = build_program(
            gl,
            &ShaderSource::vertex(VERTEX_SHADER),
            &ShaderSource::fragment(FRAGMENT_SHADER),
        )?;
        let vertices = PositionVertex::from_flat(TRIANGLE_POINTS.as_flattened());
        let mesh = Mesh::from_vertices(gl, &vertices, glow::TRIANGLES)?;

        Ok(Self { program, mesh })
    }

    fn render(&mut self, _gl: &glow::Context, _elapsed: f32) {
        self.program.use_program();
        self.mesh.draw();
    }
}
