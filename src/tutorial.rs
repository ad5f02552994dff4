//! The `Tutorial` trait and the entry point shared by every tutorial binary.

use std::process::ExitCode;
use std::sync::Arc;

use crate::abs::App;
use crate::config::Config;
use crate::error::AppError;
use crate::input::InputEvent;
use crate::logging;

/// The common interface for all tutorials.
///
/// A tutorial owns every GPU resource and every piece of per-scene state it
/// uses. The render loop handles closing and Escape itself; everything else
/// is forwarded through [`Tutorial::handle_event`].
pub trait Tutorial: Sized {
    /// Window title.
    const TITLE: &'static str;
    /// Background color, or `None` for the configured one.
    const CLEAR_COLOR: Option<[f32; 4]> = None;
    /// Enables depth testing and clears the depth buffer every frame.
    const DEPTH_TEST: bool = false;

    /// Creates the tutorial's GPU resources. Called once the context is current.
    fn new(gl: &Arc<glow::Context>, config: &Config) -> Result<Self, AppError>;

    /// Handles an input event.
    fn handle_event(&mut self, _event: &InputEvent) {}

    /// Advances time-dependent state.
    fn update(&mut self, _delta_time: f32) {}

    /// Draws a frame. `elapsed` is the number of seconds since the loop started.
    fn render(&mut self, gl: &glow::Context, elapsed: f32);
}

/// Sets up logging, the window and the tutorial, then runs the render loop.
///
/// Any initialization failure is logged and turned into a failing exit code.
pub fn launch<T: Tutorial>() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(config.log_level()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run::<T>(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{} failed to start: {e}", T::TITLE);
            ExitCode::FAILURE
        }
    }
}

fn run<T: Tutorial>(config: &Config) -> Result<(), AppError> {
    let mut app = App::new(T::TITLE, config)?;
    let mut tutorial = T::new(&app.gl, config)?;
    log::info!("{} ready", T::TITLE);
    app.run(&mut tutorial);
    Ok(())
}
