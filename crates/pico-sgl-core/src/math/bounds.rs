//! Axis-aligned bounds in screen and object space, plus the edge function
//! used by the rasterizer.

use super::vector::{vec2, vec3, Vec2, Vec3};
use super::Fx;

/// 2D axis-aligned box (screen space).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox2 {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Intersection with `other`. The max corner is clamped to stay at or
    /// above the min corner so an empty overlap collapses to a degenerate
    /// box instead of inverting.
    pub fn intersect(&self, other: &BoundingBox2) -> BoundingBox2 {
        let min = vec2(
            qfx::max(self.min.x(), other.min.x()),
            qfx::max(self.min.y(), other.min.y()),
        );
        let max = vec2(
            qfx::max(qfx::min(self.max.x(), other.max.x()), min.x()),
            qfx::max(qfx::min(self.max.y(), other.max.y()), min.y()),
        );
        BoundingBox2 { min, max }
    }

    /// True when either extent has collapsed (below one fixed-point epsilon).
    pub fn is_empty(&self) -> bool {
        let eps = Fx::from_f32(0.001);
        (self.max.x() - self.min.x()) < eps || (self.max.y() - self.min.y()) < eps
    }

    /// Tight bounds of a projected triangle (z components ignored).
    pub fn from_triangle(a: Vec2, b: Vec2, c: Vec2) -> BoundingBox2 {
        BoundingBox2 {
            min: vec2(
                qfx::min(a.x(), qfx::min(b.x(), c.x())),
                qfx::min(a.y(), qfx::min(b.y(), c.y())),
            ),
            max: vec2(
                qfx::max(a.x(), qfx::max(b.x(), c.x())),
                qfx::max(a.y(), qfx::max(b.y(), c.y())),
            ),
        }
    }
}

/// 3D axis-aligned bounding volume (object space).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BoundingVolume {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingVolume {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The eight corner points, min corner first, max corner last.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            lo,
            vec3(lo.x(), lo.y(), hi.z()),
            vec3(lo.x(), hi.y(), lo.z()),
            vec3(lo.x(), hi.y(), hi.z()),
            vec3(hi.x(), lo.y(), lo.z()),
            vec3(hi.x(), lo.y(), hi.z()),
            vec3(hi.x(), hi.y(), lo.z()),
            hi,
        ]
    }
}

/// Signed parallelogram area of (b - a) × (c - a), z components ignored.
///
/// The sign tells which side of the directed edge a→b the point c lies
/// on; the rasterizer evaluates this per pixel.
pub fn edge_function(a: Vec3, b: Vec3, c: Vec3) -> Fx {
    (c.x() - a.x()) * (b.y() - a.y()) - (c.y() - a.y()) * (b.x() - a.x())
}
