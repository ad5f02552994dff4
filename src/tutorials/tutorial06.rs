//! A rotating pyramid whose colors pulse over time.

use std::sync::Arc;

use glam::Vec4;

use crate::abs::{Mesh, ShaderProgram, ShaderSource, build_program};
use crate::camera::Turntable;
use crate::config::Config;
use crate::error::AppError;
use crate::geometry::{PYRAMID_COLORS, PYRAMID_POINTS, PYRAMID_TRIANGLES, interleave};
use crate::input::InputEvent;
use crate::tutorial::Tutorial;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 pos;
layout (location = 1) in vec3 vertex_color;
uniform mat4 MVP;
out vec4 color;
void main()
{
    gl_Position = MVP * vec4(pos, 1.0);
    color = vec4(vertex_color, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core
in vec4 color;
uniform vec4 time;
out vec4 frag_color;
void main()
{
    frag_color = time.w * color;
}
";

/// The `time` uniform: `(t / 4, t, 2t, |sin t|)`. The fragment shader scales
/// its color by the last component.
pub fn time_uniform(seconds: f32) -> Vec4 {
    Vec4::new(seconds / 4.0, seconds, 2.0 * seconds, seconds.sin().abs())
}

pub struct DrawPyramid {
    program: ShaderProgram,
    mesh: Mesh,
    turntable: Turntable,
}

impl Tutorial for DrawPyramid {
    const TITLE: &'static str = "Tutorial06";
    const DEPTH_TEST: bool = true;

    fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, AppError> {
        let program = build_program(
            gl,
            &ShaderSource::vertex(VERTEX_SHADER),
            &ShaderSource::fragment(FRAGMENT_SHADER),
        )?;
        let vertices = interleave(&PYRAMID_POINTS, &PYRAMID_COLORS);
        let mesh = Mesh::new(gl, &vertices, &PYRAMID_TRIANGLES, glow::TRIANGLES)?;

        Ok(Self {
            program,
            mesh,
            turntable: Turntable::new(config.aspect_ratio()),
        })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        self.turntable.handle_event(event);
    }

    fn update(&mut self, delta_time: f32) {
        self.turntable.update(delta_time);
    }

    fn render(&mut self, _gl: &glow::Context, elapsed: f32) {
        self.program.use_program();
        self.program.set_uniform("MVP", self.turntable.mvp());
        self.program.set_uniform("time", time_uniform(elapsed));
        self.mesh.draw();
    }
}
