//! Cameras for the 3D tutorials.
//!
//! [`OrbitCamera`] turns the model while the left mouse button is dragged,
//! [`Turntable`] spins the view around the vertical axis on its own.

use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Vec2, Vec3};
use sdl2::mouse::MouseButton;

use crate::input::InputEvent;

/// Radians of rotation per pixel of mouse drag.
pub const MOUSE_SENSITIVITY: f32 = 0.025;

/// Radians per second the turntable view rotates.
pub const TURNTABLE_SPEED: f32 = 0.06;

fn aspect_ratio(width: i32, height: i32) -> f32 {
    width as f32 / height.max(1) as f32
}

/// Looks at the origin from a fixed distance, rotated by mouse drags.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    distance: f32,
    aspect: f32,
    /// Accumulated rotation: `x` about the horizontal axis, `y` about the
    /// vertical axis.
    angles: Vec2,
    last_cursor: Vec2,
    dragging: bool,
}

impl OrbitCamera {
    pub fn new(distance: f32, aspect: f32) -> Self {
        Self {
            distance,
            aspect,
            angles: Vec2::ZERO,
            last_cursor: Vec2::ZERO,
            dragging: false,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                position,
            } => {
                self.dragging = true;
                self.last_cursor = position * MOUSE_SENSITIVITY;
            }
            InputEvent::MouseUp {
                button: MouseButton::Left,
                ..
            } => self.dragging = false,
            InputEvent::MouseMoved { position } if self.dragging => {
                let cursor = position * MOUSE_SENSITIVITY;
                let delta = cursor - self.last_cursor;
                self.angles.x += delta.y;
                self.angles.y += delta.x;
                self.last_cursor = cursor;
            }
            InputEvent::Resized { width, height } => self.aspect = aspect_ratio(width, height),
            _ => {}
        }
    }

    pub fn angles(&self) -> Vec2 {
        self.angles
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Projection * view * model, with the model scaled to half size.
    pub fn mvp(&self) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(FRAC_PI_4, self.aspect, 0.1, 100.0);
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(self.angles.x)
            * Mat4::from_rotation_y(self.angles.y);
        let model = Mat4::from_scale(Vec3::splat(0.5));
        projection * view * model
    }
}

/// A view from above and to the side that keeps turning around the Y axis.
#[derive(Debug, Clone)]
pub struct Turntable {
    eye: Vec3,
    aspect: f32,
    angle: f32,
    speed: f32,
}

impl Turntable {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(4.0, 3.0, -3.0),
            aspect,
            angle: 0.0,
            speed: TURNTABLE_SPEED,
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        self.angle = (self.angle + self.speed * delta_time) % std::f32::consts::TAU;
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::Resized { width, height } = *event {
            self.aspect = aspect_ratio(width, height);
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn mvp(&self) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(60f32.to_radians(), self.aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y) * Mat4::from_rotation_y(self.angle);
        projection * view
    }
}
