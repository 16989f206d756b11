//! Fixed-point quaternions for camera and object orientation.

use core::ops::{Div, Mul};

use super::matrix::Mat4;
use super::vector::{vec4, Vec3};
use super::Fx;

/// Rotation quaternion with fixed-point components.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Quaternion {
    pub x: Fx,
    pub y: Fx,
    pub z: Fx,
    pub w: Fx,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: Fx::ZERO,
        y: Fx::ZERO,
        z: Fx::ZERO,
        w: Fx::ONE,
    };

    pub const fn new(x: Fx, y: Fx, z: Fx, w: Fx) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle_deg` degrees around `axis`.
    pub fn from_axis_angle(axis: Vec3, angle_deg: Fx) -> Self {
        let half = angle_deg.to_f32() * 0.5 * core::f32::consts::PI / 180.0;
        let s = Fx::from_f32(libm::sinf(half));
        let c = Fx::from_f32(libm::cosf(half));
        Self {
            x: axis.x() * s,
            y: axis.y() * s,
            z: axis.z() * s,
            w: c,
        }
    }

    /// From Euler angles in degrees, rotation order yaw (Y), pitch (X),
    /// roll (Z).
    pub fn from_euler(euler_deg: Vec3) -> Self {
        let half = core::f32::consts::PI / 360.0;
        let ex = euler_deg.x().to_f32() * half;
        let ey = euler_deg.y().to_f32() * half;
        let ez = euler_deg.z().to_f32() * half;

        let (cx, sx) = (Fx::from_f32(libm::cosf(ex)), Fx::from_f32(libm::sinf(ex)));
        let (cy, sy) = (Fx::from_f32(libm::cosf(ey)), Fx::from_f32(libm::sinf(ey)));
        let (cz, sz) = (Fx::from_f32(libm::cosf(ez)), Fx::from_f32(libm::sinf(ez)));

        Self {
            x: cy * sx * cz + sy * cx * sz,
            y: sy * cx * cz - cy * sx * sz,
            z: cy * cx * sz - sy * sx * cz,
            w: cy * cx * cz + sy * sx * sz,
        }
    }

    /// Rotation matrix equivalent, yaw-pitch-roll convention.
    pub fn to_matrix(self) -> Mat4 {
        let two = Fx::from_int(2);
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        Mat4::from_rows([
            vec4(
                Fx::ONE - two * y * y - two * z * z,
                two * x * y + two * w * z,
                two * x * z - two * w * y,
                Fx::ZERO,
            ),
            vec4(
                two * x * y - two * w * z,
                Fx::ONE - two * x * x - two * z * z,
                two * y * z + two * w * x,
                Fx::ZERO,
            ),
            vec4(
                two * x * z + two * w * y,
                two * y * z - two * w * x,
                Fx::ONE - two * x * x - two * y * y,
                Fx::ZERO,
            ),
            vec4(Fx::ZERO, Fx::ZERO, Fx::ZERO, Fx::ONE),
        ])
    }
}

/// Composition; applies `rhs` first, then `self`, in the engine's
/// yaw-pitch-roll handedness.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        Self {
            x: self.w * o.x - self.x * o.w - self.y * o.z + self.z * o.y,
            y: self.w * o.y - self.y * o.w - self.z * o.x + self.x * o.z,
            z: self.w * o.z - self.z * o.w - self.x * o.y + self.y * o.x,
            w: self.w * o.w + self.x * o.x + self.y * o.y + self.z * o.z,
        }
    }
}

impl Mul<Fx> for Quaternion {
    type Output = Self;
    fn mul(self, s: Fx) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }
}

impl Div<Fx> for Quaternion {
    type Output = Self;
    fn div(self, s: Fx) -> Self {
        Self {
            x: self.x / s,
            y: self.y / s,
            z: self.z / s,
            w: self.w / s,
        }
    }
}
