//! An empty window cleared to yellow.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::tutorial::Tutorial;

pub struct EmptyWindow;

impl Tutorial for EmptyWindow {
    const TITLE: &'static str = "Tutorial01";
    const CLEAR_COLOR: Option<[f32; 4]> = Some([1.0, 1.0, 0.0, 1.0]);

    fn new(_gl: &Arc<glow::Context>, _config: &Config) -> Result<Self, AppError> {
        Ok(Self)
    }

    fn render(&mut self, _gl: &glow::Context, _elapsed: f32) {}
}
