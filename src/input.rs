//! Window-independent input events.
//!
//! The render loop converts SDL events into [`InputEvent`]s before handing
//! them to a tutorial, so event handlers can be driven directly in tests.

use glam::Vec2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// An input event relevant to the tutorials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    KeyUp(Keycode),
    Resized { width: i32, height: i32 },
    MouseDown { button: MouseButton, position: Vec2 },
    MouseUp { button: MouseButton, position: Vec2 },
    MouseMoved { position: Vec2 },
}

impl InputEvent {
    /// Converts an SDL event. Returns `None` for events the tutorials ignore.
    pub fn from_sdl(event: &Event) -> Option<Self> {
        let event = match *event {
            Event::Quit { .. } => Self::Quit,
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => Self::KeyDown(keycode),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => Self::KeyUp(keycode),
            Event::Window {
                win_event: WindowEvent::Resized(width, height),
                ..
            } => Self::Resized { width, height },
            Event::MouseButtonDown {
                mouse_btn, x, y, ..
            } => Self::MouseDown {
                button: mouse_btn,
                position: Vec2::new(x as f32, y as f32),
            },
            Event::MouseButtonUp {
                mouse_btn, x, y, ..
            } => Self::MouseUp {
                button: mouse_btn,
                position: Vec2::new(x as f32, y as f32),
            },
            Event::MouseMotion { x, y, .. } => Self::MouseMoved {
                position: Vec2::new(x as f32, y as f32),
            },
            _ => return None,
        };
        Some(event)
    }
}

/// Whether the render loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

impl LoopControl {
    /// Closing the window or pressing Escape ends the loop.
    pub fn for_event(event: &InputEvent) -> Self {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => LoopControl::Exit,
            _ => LoopControl::Continue,
        }
    }
}
