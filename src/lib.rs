//! OpenGL tutorials on top of SDL2 and glow.
//!
//! Each tutorial binary in `src/bin` is a thin wrapper around [`launch`] and
//! one of the [`tutorials`]. The shared pieces live here: the shader program
//! builder and the other OpenGL wrappers in [`abs`], the primitive tables in
//! [`geometry`], and the window/input plumbing.

pub mod abs;
pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod tutorial;
pub mod tutorials;
pub mod vertex;

pub use error::{AppError, ShaderError};
pub use tutorial::{Tutorial, launch};
