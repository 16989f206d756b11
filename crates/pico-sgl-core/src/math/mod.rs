//! Fixed-point linear algebra: vectors, matrices, quaternions, bounds.

pub mod bounds;
pub mod matrix;
pub mod quat;
pub mod vector;

pub use qfx::{Q, Q10, Q12, Q16};

/// Engine-wide scalar precision.
pub type Fx = Q16;

pub use bounds::{edge_function, BoundingBox2, BoundingVolume};
pub use matrix::{Mat4, Matrix};
pub use quat::Quaternion;
pub use vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4, Vector};
