//! A cube with random vertex colors that turns while the left mouse button
//! is dragged.

use std::sync::Arc;

use glam::Vec3;

use crate::abs::{Mesh, ShaderProgram, build_program_from_files};
use crate::camera::OrbitCamera;
use crate::config::Config;
use crate::error::AppError;
use crate::geometry::{CUBE_POINTS, CUBE_TRIANGLES, expand_triangles, random_colors};
use crate::input::InputEvent;
use crate::tutorial::Tutorial;
use crate::vertex::{ColorVertex, PositionVertex};

const VERTEX_SHADER_PATH: &str = "shaders/tutorial05/static.vert";
const FRAGMENT_SHADER_PATH: &str = "shaders/tutorial05/static.frag";

/// Distance from the camera to the cube's center.
const CAMERA_DISTANCE: f32 = 5.0;

pub struct DrawCube {
    program: ShaderProgram,
    mesh: Mesh,
    camera: OrbitCamera,
}

impl Tutorial for DrawCube {
    const TITLE: &'static str = "Tutorial05";
    const DEPTH_TEST: bool = true;

    fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, AppError> {
        let program = build_program_from_files(gl, VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)?;

        // Every triangle corner gets its own color, so the cube is expanded
        // instead of indexed.
        let positions = expand_triangles(&CUBE_POINTS, &CUBE_TRIANGLES);
        let colors = random_colors(&mut rand::rng(), CUBE_TRIANGLES.len());
        let vertices: Vec<ColorVertex> = PositionVertex::from_flat(&positions)
            .into_iter()
            .zip(colors)
            .map(|(vertex, color)| ColorVertex {
                position: vertex.position,
                color: Vec3::from_array(color),
            })
            .collect();
        let mesh = Mesh::from_vertices(gl, &vertices, glow::TRIANGLES)?;

        Ok(Self {
            program,
            mesh,
            camera: OrbitCamera::new(CAMERA_DISTANCE, config.aspect_ratio()),
        })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        self.camera.handle_event(event);
    }

    fn render(&mut self, _gl: &glow::Context, _elapsed: f32) {
        self.program.use_program();
        self.program.set_uniform("MVP", self.camera.mvp());
        self.mesh.draw();
    }
}
