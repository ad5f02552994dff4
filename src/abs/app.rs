//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application, and
//! the render loop that drives a [`Tutorial`].

use std::sync::Arc;
use std::time::Instant;

use glow::HasContext;

use crate::config::Config;
use crate::error::AppError;
use crate::input::{InputEvent, LoopControl};
use crate::tutorial::Tutorial;

/// Lowest OpenGL version the tutorials are written against.
const REQUIRED_GL_VERSION: (u32, u32) = (3, 3);

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    clear_color: [f32; 4],
}

impl App {
    /// Creates a window with an OpenGL 3.3 core context and loads the
    /// OpenGL entry points.
    pub fn new(title: &str, config: &Config) -> Result<Self, AppError> {
        let sdl = sdl2::init().map_err(AppError::Window)?;
        let video_subsystem = sdl.video().map_err(AppError::Window)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(REQUIRED_GL_VERSION.0 as u8, REQUIRED_GL_VERSION.1 as u8);
        #[cfg(target_os = "macos")]
        gl_attr.set_context_flags().forward_compatible().set();

        let window = video_subsystem
            .window(title, config.width, config.height)
            .opengl()
            .resizable()
            .position_centered()
            .build()?;
        let gl_context = window.gl_create_context().map_err(AppError::Window)?;
        window.gl_make_current(&gl_context).map_err(AppError::Window)?;

        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("could not set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let version = gl.version();
        if (version.major, version.minor) < REQUIRED_GL_VERSION {
            return Err(AppError::Loader(format!(
                "OpenGL {}.{} core is required, the driver provides {}.{}",
                REQUIRED_GL_VERSION.0, REQUIRED_GL_VERSION.1, version.major, version.minor
            )));
        }
        log::info!(
            "created {}x{} window \"{title}\" with OpenGL {}.{} {}",
            config.width,
            config.height,
            version.major,
            version.minor,
            version.vendor_info
        );

        let event_pump = sdl.event_pump().map_err(AppError::Window)?;
        let gl = Arc::new(gl);

        unsafe {
            gl.viewport(0, 0, config.width as i32, config.height as i32);
        }

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
            clear_color: config.clear_color,
        })
    }

    /// Runs the render loop until the window is closed or Escape is pressed.
    pub fn run<T: Tutorial>(&mut self, tutorial: &mut T) {
        let clear_color = T::CLEAR_COLOR.unwrap_or(self.clear_color);
        let mut clear_mask = glow::COLOR_BUFFER_BIT;
        if T::DEPTH_TEST {
            clear_mask |= glow::DEPTH_BUFFER_BIT;
            unsafe {
                self.gl.enable(glow::DEPTH_TEST);
                self.gl.depth_func(glow::LESS);
            }
        }

        let start = Instant::now();
        let mut last_frame_time = start;

        'running: loop {
            for event in self.event_pump.poll_iter() {
                let Some(event) = InputEvent::from_sdl(&event) else {
                    continue;
                };
                if LoopControl::for_event(&event) == LoopControl::Exit {
                    log::info!("exit requested");
                    break 'running;
                }
                if let InputEvent::Resized { width, height } = event {
                    unsafe {
                        self.gl.viewport(0, 0, width, height);
                    }
                }
                tutorial.handle_event(&event);
            }

            let now = Instant::now();
            let delta_time = now.duration_since(last_frame_time).as_secs_f32();
            last_frame_time = now;
            tutorial.update(delta_time);

            unsafe {
                let [r, g, b, a] = clear_color;
                self.gl.clear_color(r, g, b, a);
                self.gl.clear(clear_mask);
            }
            tutorial.render(&self.gl, now.duration_since(start).as_secs_f32());

            self.window.gl_swap_window();
        }
    }
}
