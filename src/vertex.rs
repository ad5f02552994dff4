//! Vertex layouts used by the tutorials.
//!
//! Attribute locations match the `layout (location = N)` qualifiers in the
//! shaders: 0 is the position, 1 the color, 2 the texture coordinate.

use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::abs::Vertex;

/// A bare position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl PositionVertex {
    /// Groups a flat `x y z x y z ...` list into vertices. A trailing
    /// incomplete triple is dropped.
    pub fn from_flat(data: &[f32]) -> Vec<Self> {
        data.chunks_exact(3)
            .map(|xyz| Self {
                position: Vec3::new(xyz[0], xyz[1], xyz[2]),
            })
            .collect()
    }
}

impl Vertex for PositionVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<PositionVertex>() as i32;

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        }
    }
}

/// A position with an RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl ColorVertex {
    pub fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(position),
            color: Vec3::from_array(color),
        }
    }
}

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<ColorVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                3,
                glow::FLOAT,
                false,
                stride,
                size_of::<Vec3>() as i32,
            );
        }
    }
}

/// A position, an RGB color and a texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct TexturedVertex {
    pub position: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

impl TexturedVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position: Vec3::from_array(position),
            color: Vec3::from_array(color),
            uv: Vec2::from_array(uv),
        }
    }
}

impl Vertex for TexturedVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<TexturedVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                3,
                glow::FLOAT,
                false,
                stride,
                size_of::<Vec3>() as i32,
            );

            // Texture coordinate attribute
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(
                2,
                2,
                glow::FLOAT,
                false,
                stride,
                (2 * size_of::<Vec3>()) as i32,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_are_tightly_packed() {
        assert_eq!(size_of::<PositionVertex>(), 3 * size_of::<f32>());
        assert_eq!(size_of::<ColorVertex>(), 6 * size_of::<f32>());
        assert_eq!(size_of::<TexturedVertex>(), 8 * size_of::<f32>());
    }

    #[test]
    fn test_from_flat_groups_triples() {
        let vertices = PositionVertex::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(vertices[1].position, Vec3::new(4.0, 5.0, 6.0));
    }
}
