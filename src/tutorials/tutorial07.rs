//! A quad blending two textures. Up and Down change how much of the second
//! texture shows through.

use std::path::Path;
use std::sync::Arc;

use sdl2::keyboard::Keycode;

use crate::abs::{Mesh, ShaderProgram, Texture, build_program_from_files, checkerboard};
use crate::config::Config;
use crate::error::AppError;
use crate::geometry::{QUAD_TRIANGLES, QUAD_VERTICES};
use crate::input::InputEvent;
use crate::tutorial::Tutorial;

const VERTEX_SHADER_PATH: &str = "shaders/tutorial07/static.vert";
const FRAGMENT_SHADER_PATH: &str = "shaders/tutorial07/static.frag";
const WALL_TEXTURE_PATH: &str = "assets/wall.png";
const FACE_TEXTURE_PATH: &str = "assets/awesomeface.png";

const INITIAL_MIX_RATIO: f32 = 0.2;
const MIX_STEP: f32 = 0.1;

/// The mix ratio after `event`, kept within `[0, 1]`.
pub fn mix_ratio_after(ratio: f32, event: &InputEvent) -> f32 {
    let delta = match event {
        InputEvent::KeyDown(Keycode::Up) => MIX_STEP,
        InputEvent::KeyDown(Keycode::Down) => -MIX_STEP,
        _ => return ratio,
    };
    (ratio + delta).clamp(0.0, 1.0)
}

/// Loads a texture, substituting a checkerboard when the image is missing
/// or cannot be decoded.
fn load_texture(
    gl: &Arc<glow::Context>,
    path: impl AsRef<Path>,
    flip_vertically: bool,
) -> Result<Texture, AppError> {
    match Texture::load(gl, path, flip_vertically) {
        Err(e @ AppError::Texture { .. }) => {
            log::error!("{e}; using a checkerboard instead");
            let pixels = checkerboard(64, 8, [255, 0, 255, 255], [32, 32, 32, 255]);
            Texture::new_from_data(gl, 64, 64, &pixels)
        }
        result => result,
    }
}

pub struct BlendTextures {
    program: ShaderProgram,
    mesh: Mesh,
    wall: Texture,
    face: Texture,
    mix_ratio: f32,
}

impl Tutorial for BlendTextures {
    const TITLE: &'static str = "Tutorial07";

    fn new(gl: &Arc<glow::Context>, _config: &Config) -> Result<Self, AppError> {
        let program = build_program_from_files(gl, VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)?;

        // Sampler to texture unit assignment only has to happen once.
        program.use_program();
        program.set_uniform("Tex1", 0);
        program.set_uniform("Tex2", 1);

        let mesh = Mesh::new(gl, &QUAD_VERTICES, &QUAD_TRIANGLES, glow::TRIANGLES)?;

        let wall = load_texture(gl, WALL_TEXTURE_PATH, false)?;
        let face = load_texture(gl, FACE_TEXTURE_PATH, true)?;
        log::info!(
            "textures loaded: wall {}x{}, face {}x{}",
            wall.width(),
            wall.height(),
            face.width(),
            face.height()
        );

        Ok(Self {
            program,
            mesh,
            wall,
            face,
            mix_ratio: INITIAL_MIX_RATIO,
        })
    }

    fn handle_event(&mut self, event: &InputEvent) {
        let ratio = mix_ratio_after(self.mix_ratio, event);
        if ratio != self.mix_ratio {
            log::debug!("mix ratio {ratio:.1}");
            self.mix_ratio = ratio;
        }
    }

    fn render(&mut self, _gl: &glow::Context, _elapsed: f32) {
        self.wall.bind(0);
        self.face.bind(1);

        self.program.use_program();
        self.program.set_uniform("mix_ratio", self.mix_ratio);
        self.mesh.draw();
    }
}
