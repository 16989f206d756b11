//! Demo geometry and texture data, stored as const arrays the same way
//! the embedded target references asset-embed output.

use pico_sgl_core::color::Rgba4444;
use pico_sgl_core::render::mesh::Vertex;

/// Unit cube with outward-pointing corner normals (the diagonal from the
/// center through each corner, prenormalized).
pub const CUBE_VERTICES: [Vertex; 8] = [
    Vertex::from_f32([-1.0, -1.0, -1.0], [-0.5774, -0.5774, -0.5774], [0.0, 0.0]),
    Vertex::from_f32([1.0, -1.0, -1.0], [0.5774, -0.5774, -0.5774], [1.0, 0.0]),
    Vertex::from_f32([-1.0, 1.0, -1.0], [-0.5774, 0.5774, -0.5774], [0.0, 1.0]),
    Vertex::from_f32([1.0, 1.0, -1.0], [0.5774, 0.5774, -0.5774], [1.0, 1.0]),
    Vertex::from_f32([-1.0, -1.0, 1.0], [-0.5774, -0.5774, 0.5774], [1.0, 0.0]),
    Vertex::from_f32([1.0, -1.0, 1.0], [0.5774, -0.5774, 0.5774], [0.0, 0.0]),
    Vertex::from_f32([-1.0, 1.0, 1.0], [-0.5774, 0.5774, 0.5774], [1.0, 1.0]),
    Vertex::from_f32([1.0, 1.0, 1.0], [0.5774, 0.5774, 0.5774], [0.0, 1.0]),
];

/// Counter-clockwise triangles, two per face.
pub const CUBE_INDICES: [u32; 36] = [
    0, 2, 1, 1, 2, 3, // back
    1, 3, 5, 5, 3, 7, // right
    5, 7, 4, 4, 7, 6, // front
    4, 6, 0, 0, 6, 2, // left
    4, 0, 5, 5, 0, 1, // bottom
    2, 6, 3, 3, 6, 7, // top
];

/// Square pyramid sitting on the XZ plane.
pub const PYRAMID_VERTICES: [Vertex; 5] = [
    Vertex::from_f32([-0.5, 0.0, -0.5], [-0.5, 0.5, -0.5], [0.0, 0.0]),
    Vertex::from_f32([0.5, 0.0, -0.5], [0.5, 0.5, -0.5], [1.0, 0.0]),
    Vertex::from_f32([-0.5, 0.0, 0.5], [-0.5, 0.5, 0.5], [0.0, 1.0]),
    Vertex::from_f32([0.5, 0.0, 0.5], [0.5, 0.5, 0.5], [1.0, 1.0]),
    Vertex::from_f32([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.5, 0.5]),
];

pub const PYRAMID_INDICES: [u32; 18] = [
    4, 1, 0, //
    4, 3, 1, //
    4, 2, 3, //
    4, 0, 2, //
    1, 2, 0, //
    1, 3, 2, //
];

pub const CHECKERBOARD_SIZE: u32 = 16;

/// 16x16 checkerboard, alternating 4x4 blocks of white and dark grey,
/// generated at compile time.
pub const CHECKERBOARD: [Rgba4444; (CHECKERBOARD_SIZE * CHECKERBOARD_SIZE) as usize] = {
    let mut data = [Rgba4444::from_bits(0); (CHECKERBOARD_SIZE * CHECKERBOARD_SIZE) as usize];
    let mut y = 0;
    while y < CHECKERBOARD_SIZE as usize {
        let mut x = 0;
        while x < CHECKERBOARD_SIZE as usize {
            let block = (x / 4) + (y / 4);
            data[y * CHECKERBOARD_SIZE as usize + x] = if block % 2 == 0 {
                Rgba4444::from_bits(0xFFFF) // white
            } else {
                Rgba4444::from_bits(0x444F) // dark grey
            };
            x += 1;
        }
        y += 1;
    }
    data
};
