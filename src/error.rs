//! Crate-level error types.
//!
//! [`ShaderError`] covers everything the shader program builder can report,
//! [`AppError`] covers tutorial start-up as a whole.

use std::fmt;
use std::path::PathBuf;

use crate::abs::ShaderStage;

/// Errors produced while building a shader program.
#[derive(Debug)]
pub enum ShaderError {
    /// A shader source file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A stage failed to compile. `log` is the driver's info log.
    Compile { stage: ShaderStage, log: String },
    /// The program failed to link. `log` is the driver's info log.
    Link { log: String },
    /// The backend refused to create a shader or program object.
    Backend(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(
                f,
                "impossible to open '{}' ({source}); are you in the right directory? \
                 please check your working directory",
                path.display()
            ),
            Self::Compile { stage, log } => {
                write!(f, "{stage} shader failed to compile:\n{log}")
            }
            Self::Link { log } => write!(f, "shader program failed to link:\n{log}"),
            Self::Backend(msg) => write!(f, "shader backend error: {msg}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors that abort a tutorial before its render loop starts.
#[derive(Debug)]
pub enum AppError {
    /// SDL initialization, window or GL context creation failed.
    Window(String),
    /// OpenGL entry points could not be loaded or the context is too old.
    Loader(String),
    /// Shader program construction failed.
    Shader(ShaderError),
    /// A texture image could not be opened or decoded.
    Texture {
        path: PathBuf,
        source: image::ImageError,
    },
    /// A GPU object (buffer, vertex array, texture) could not be created.
    Resource(String),
    /// The config file exists but could not be read or parsed.
    Config { path: PathBuf, message: String },
    /// The global logger was already installed.
    Logger(log::SetLoggerError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(msg) => write!(f, "window error: {msg}"),
            Self::Loader(msg) => write!(f, "OpenGL loader error: {msg}"),
            Self::Shader(e) => write!(f, "{e}"),
            Self::Texture { path, source } => {
                write!(f, "failed to load texture '{}': {source}", path.display())
            }
            Self::Resource(msg) => write!(f, "failed to create GPU resource: {msg}"),
            Self::Config { path, message } => {
                write!(f, "invalid config '{}': {message}", path.display())
            }
            Self::Logger(e) => write!(f, "logger setup failed: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shader(e) => Some(e),
            Self::Texture { source, .. } => Some(source),
            Self::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShaderError> for AppError {
    fn from(e: ShaderError) -> Self {
        Self::Shader(e)
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e)
    }
}

impl From<sdl2::video::WindowBuildError> for AppError {
    fn from(e: sdl2::video::WindowBuildError) -> Self {
        Self::Window(e.to_string())
    }
}
