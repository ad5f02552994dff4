//! A hexagon with per-vertex colors, drawn through an element buffer.
//!
//! The shaders are read from `shaders/tutorial04/`, relative to the working
//! directory.

use std::sync::Arc;

use crate::abs::{Mesh, ShaderProgram, build_program_from_files};
use crate::config::Config;
use crate::error::AppError;
use crate::geometry::{HEXAGON_COLORS, HEXAGON_POINTS, HEXAGON_TRIANGLES, interleave};
use crate::tutorial::Tutorial;

const VERTEX_SHADER_PATH: &str = "shaders/tutorial04/static.vert";
const FRAGMENT_SHADER_PATH: &str = "shaders/tutorial04/static.frag";

pub struct DrawHexagon {
    program: ShaderProgram,
    mesh: Mesh,
}

impl Tutorial for DrawHexagon {
    const TITLE: &'static str = "Tutorial04";

    fn new(gl: &Arc<glow::Context>, _config: &Config) -> Result<Self, AppError> {
        let program = build_program_from_files(gl, VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)?;
        let vertices = interleave(&HEXAGON_POINTS, &HEXAGON_COLORS);
        let mesh = Mesh::new(gl, &vertices, &HEXAGON_TRIANGLES, glow::TRIANGLES)?;

        Ok(Self { program, mesh })
    }

    fn render(&mut self, _gl: &glow::Context, _elapsed: f32) {
        self.program.use_program();
        self.mesh.draw();
    }
}
