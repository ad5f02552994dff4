//! Hand-authored primitives.
//!
//! Every shape is a table of points plus a table of triangle indices into it.
//! Coordinates of the 2D shapes are in normalized device space:
//!
//! ```text
//!            y
//!            ^
//!          1 |
//!        ____|____
//!    -1 |    |    | 1
//!  -----|----0----|----> x
//!       |____|____|
//!            | -1
//! ```

use rand::Rng;

use crate::vertex::{ColorVertex, TexturedVertex};

pub const TRIANGLE_POINTS: [[f32; 3]; 3] = [
    [-0.5, -0.5, 0.0], // 0
    [0.5, -0.7, 0.0],  // 1
    [0.0, 0.5, 0.0],   // 2
];

//  0_______1
//  |      /|
//  |    /  |
//  |  /    |
//  |/______|
//  2       3
pub const RECTANGLE_POINTS: [[f32; 3]; 4] = [
    [-0.5, -0.5, 0.0], // 0
    [-0.5, 0.5, 0.0],  // 1
    [0.5, -0.5, 0.0],  // 2
    [0.5, 0.5, 0.0],   // 3
];

pub const RECTANGLE_TRIANGLES: [u32; 6] = [
    0, 1, 2, //
    1, 2, 3,
];

//       0
//     /   \
//   1/     \2
//   |       |
//   3|      |4
//     \    /
//       5
pub const HEXAGON_POINTS: [[f32; 3]; 6] = [
    [0.0, 0.5, 0.0],   // 0
    [-0.4, 0.2, 0.0],  // 1
    [0.4, 0.2, 0.0],   // 2
    [-0.4, -0.2, 0.0], // 3
    [0.4, -0.2, 0.0],  // 4
    [0.0, -0.5, 0.0],  // 5
];

/// Top cap, two triangles for the 1-2-3-4 rectangle, bottom cap.
pub const HEXAGON_TRIANGLES: [u32; 12] = [
    0, 1, 2, //
    1, 2, 3, //
    2, 3, 4, //
    3, 4, 5,
];

pub const HEXAGON_COLORS: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0], // 0
    [0.0, 1.0, 0.0], // 1
    [0.0, 1.0, 0.0], // 2
    [0.0, 0.0, 1.0], // 3
    [0.0, 0.0, 1.0], // 4
    [1.0, 0.0, 0.0], // 5
];

//     4________7
//     /       /|
//    /       / |
//  5/______6/  |
//   |       |  |
//   |       |  / 3
//   |       | /
//   |_______|/
//   1       2
pub const CUBE_POINTS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0], // 0
    [1.0, -1.0, -1.0],  // 1
    [1.0, -1.0, 1.0],   // 2
    [-1.0, -1.0, 1.0],  // 3
    [-1.0, 1.0, -1.0],  // 4
    [1.0, 1.0, -1.0],   // 5
    [1.0, 1.0, 1.0],    // 6
    [-1.0, 1.0, 1.0],   // 7
];

pub const CUBE_TRIANGLES: [u32; 36] = [
    // bottom
    0, 1, 2, //
    0, 2, 3, //
    // top
    4, 5, 6, //
    4, 6, 7, //
    // left
    0, 4, 5, //
    0, 1, 5, //
    // right
    3, 2, 6, //
    3, 6, 7, //
    // back
    0, 4, 7, //
    0, 3, 7, //
    // front
    1, 2, 6, //
    1, 5, 6,
];

//        0______________3
//       / \          / /
//      /    \      /  /
//     /       4      /
//    /     /   \    /
//   /   /       \  /
//  1/_/__________\/2
pub const PYRAMID_POINTS: [[f32; 3]; 5] = [
    [-1.0, -1.0, -1.0], // 0
    [-1.0, -1.0, 1.0],  // 1
    [1.0, -1.0, 1.0],   // 2
    [1.0, -1.0, -1.0],  // 3
    [0.0, 1.0, 0.0],    // 4
];

pub const PYRAMID_COLORS: [[f32; 3]; 5] = [
    [1.0, 0.0, 0.0], // 0
    [0.0, 1.0, 0.0], // 1
    [0.0, 0.0, 1.0], // 2
    [1.0, 1.0, 0.0], // 3
    [0.0, 1.0, 1.0], // 4
];

pub const PYRAMID_TRIANGLES: [u32; 18] = [
    // bottom
    0, 1, 2, //
    0, 2, 3, //
    // left
    0, 1, 4, //
    // right
    2, 3, 4, //
    // front
    1, 2, 4, //
    // back
    0, 4, 3,
];

pub const QUAD_VERTICES: [TexturedVertex; 4] = [
    TexturedVertex::new([0.5, 0.5, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0]), // top right
    TexturedVertex::new([0.5, -0.5, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]), // bottom right
    TexturedVertex::new([-0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]), // bottom left
    TexturedVertex::new([-0.5, 0.5, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0]), // top left
];

pub const QUAD_TRIANGLES: [u32; 6] = [
    0, 1, 3, //
    1, 2, 3,
];

/// Replaces every index with the point it refers to, producing a flat
/// `x y z` list suitable for a non-indexed draw.
///
/// Panics if an index is out of range for `points`.
pub fn expand_triangles(points: &[[f32; 3]], indices: &[u32]) -> Vec<f32> {
    indices
        .iter()
        .flat_map(|&index| points[index as usize])
        .collect()
}

/// Pairs each point with the color at the same position. Extra entries in
/// the longer slice are ignored.
pub fn interleave(points: &[[f32; 3]], colors: &[[f32; 3]]) -> Vec<ColorVertex> {
    points
        .iter()
        .zip(colors)
        .map(|(&position, &color)| ColorVertex::new(position, color))
        .collect()
}

/// `count` random RGB colors. Each channel is a multiple of 0.01 in `[0, 0.99]`.
pub fn random_colors<R: Rng>(rng: &mut R, count: usize) -> Vec<[f32; 3]> {
    let mut channel = || rng.random_range(0..100u32) as f32 / 100.0;
    (0..count)
        .map(|_| [channel(), channel(), channel()])
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    /// Index expansion written out as nested loops.
    fn manual_expansion(points: &[[f32; 3]], indices: &[u32]) -> Vec<f32> {
        let flat: Vec<f32> = points.iter().flatten().copied().collect();
        let mut res = vec![0.0; indices.len() * 3];
        for (i, &index) in indices.iter().enumerate() {
            for j in 0..3 {
                res[i * 3 + j] = flat[index as usize * 3 + j];
            }
        }
        res
    }

    #[test]
    fn test_hexagon_triangulation() {
        assert_eq!(HEXAGON_POINTS.len(), 6);
        assert_eq!(HEXAGON_TRIANGLES.len() / 3, 4);
        assert_eq!(HEXAGON_TRIANGLES, [0, 1, 2, 1, 2, 3, 2, 3, 4, 3, 4, 5]);
    }

    #[test]
    fn test_cube_triangulation() {
        assert_eq!(CUBE_POINTS.len(), 8);
        assert_eq!(CUBE_TRIANGLES.len() / 3, 12);
        assert_eq!(
            CUBE_TRIANGLES,
            [
                0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 0, 4, 5, 0, 1, 5, 3, 2, 6, 3, 6, 7, 0, 4, 7,
                0, 3, 7, 1, 2, 6, 1, 5, 6,
            ]
        );
        assert!(CUBE_TRIANGLES.iter().all(|&i| (i as usize) < CUBE_POINTS.len()));
    }

    #[test]
    fn test_every_index_is_in_range() {
        let shapes: [(&[[f32; 3]], &[u32]); 4] = [
            (&RECTANGLE_POINTS[..], &RECTANGLE_TRIANGLES[..]),
            (&HEXAGON_POINTS[..], &HEXAGON_TRIANGLES[..]),
            (&CUBE_POINTS[..], &CUBE_TRIANGLES[..]),
            (&PYRAMID_POINTS[..], &PYRAMID_TRIANGLES[..]),
        ];
        for (points, indices) in shapes {
            assert_eq!(indices.len() % 3, 0);
            assert!(indices.iter().all(|&i| (i as usize) < points.len()));
        }
        assert!(QUAD_TRIANGLES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }

    #[test]
    fn test_rectangle_expansion() {
        let vertices = expand_triangles(&RECTANGLE_POINTS, &RECTANGLE_TRIANGLES);
        assert_eq!(vertices.len(), 18);
        assert_eq!(
            vertices,
            [
                -0.5, -0.5, 0.0, -0.5, 0.5, 0.0, 0.5, -0.5, 0.0, //
                -0.5, 0.5, 0.0, 0.5, -0.5, 0.0, 0.5, 0.5, 0.0,
            ]
        );
    }

    #[test]
    fn test_hexagon_expansion_matches_manual_loop() {
        let vertices = expand_triangles(&HEXAGON_POINTS, &HEXAGON_TRIANGLES);
        let expected = manual_expansion(&HEXAGON_POINTS, &HEXAGON_TRIANGLES);
        assert_eq!(vertices.len(), 36);
        for (position, (got, want)) in vertices.iter().zip(&expected).enumerate() {
            assert_eq!(got, want, "mismatch at float {position}");
        }
    }

    #[test]
    fn test_cube_expansion() {
        let vertices = expand_triangles(&CUBE_POINTS, &CUBE_TRIANGLES);
        assert_eq!(vertices.len(), 108);
        assert_eq!(vertices, manual_expansion(&CUBE_POINTS, &CUBE_TRIANGLES));
        // Last triangle is 1 5 6
        assert_eq!(&vertices[99..], &[1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_interleave() {
        let vertices = interleave(&PYRAMID_POINTS, &PYRAMID_COLORS);
        assert_eq!(vertices.len(), 5);
        assert_eq!(vertices[4].position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(vertices[4].color, Vec3::new(0.0, 1.0, 1.0));

        let short = interleave(&HEXAGON_POINTS, &HEXAGON_COLORS[..2]);
        assert_eq!(short.len(), 2);
    }

    #[test]
    fn test_random_colors_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = random_colors(&mut rng, CUBE_TRIANGLES.len());
        assert_eq!(colors.len(), 36);
        for channel in colors.iter().flatten() {
            assert!((0.0..1.0).contains(channel));
            let hundredths = channel * 100.0;
            assert!((hundredths - hundredths.round()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_random_colors_are_seeded() {
        let a = random_colors(&mut StdRng::seed_from_u64(42), 4);
        let b = random_colors(&mut StdRng::seed_from_u64(42), 4);
        assert_eq!(a, b);
    }
}
