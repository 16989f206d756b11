//! Mesh geometry: vertex/index buffers over borrowed static data.

use crate::math::{vec2, vec3, BoundingVolume, Fx, Vec2, Vec3};

/// A single vertex in object space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    pub const fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Literal-friendly constructor used by embedded asset arrays.
    pub const fn from_f32(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position: vec3(
                Fx::from_f32(position[0]),
                Fx::from_f32(position[1]),
                Fx::from_f32(position[2]),
            ),
            normal: vec3(
                Fx::from_f32(normal[0]),
                Fx::from_f32(normal[1]),
                Fx::from_f32(normal[2]),
            ),
            uv: vec2(Fx::from_f32(uv[0]), Fx::from_f32(uv[1])),
        }
    }
}

/// Triangle mesh over borrowed vertex and index slices.
///
/// Indices have stride 3; a trailing partial triple is ignored. The
/// bounding volume is derived from vertex extents and can be recomputed
/// on demand after the (static) buffers are swapped out.
#[derive(Clone, Copy, Debug)]
pub struct Mesh<'a> {
    pub vertices: &'a [Vertex],
    pub indices: &'a [u32],
    pub volume: BoundingVolume,
}

impl<'a> Mesh<'a> {
    pub fn new(vertices: &'a [Vertex], indices: &'a [u32]) -> Self {
        let mut mesh = Self {
            vertices,
            indices,
            volume: BoundingVolume::default(),
        };
        mesh.recalculate_volume();
        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Recompute the axis-aligned bounding volume from vertex extents.
    pub fn recalculate_volume(&mut self) -> BoundingVolume {
        let mut iter = self.vertices.iter();
        let (mut min, mut max) = match iter.next() {
            Some(v) => (v.position, v.position),
            None => (Vec3::ZERO, Vec3::ZERO),
        };

        for v in iter {
            for i in 0..3 {
                min[i] = qfx::min(min[i], v.position[i]);
                max[i] = qfx::max(max[i], v.position[i]);
            }
        }

        self.volume = BoundingVolume::new(min, max);
        self.volume
    }
}
