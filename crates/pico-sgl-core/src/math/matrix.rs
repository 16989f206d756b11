//! Row-major matrices of fixed-point row vectors.

use core::ops::{Index, IndexMut, Mul};

use super::vector::{vec3, Vec3, Vec4, Vector};
use super::Fx;

/// A `C`-column, `R`-row matrix stored as `R` row vectors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Matrix<const C: usize, const R: usize> {
    rows: [Vector<C>; R],
}

impl<const C: usize, const R: usize> Default for Matrix<C, R> {
    fn default() -> Self {
        Self {
            rows: [Vector::<C>::default(); R],
        }
    }
}

pub type Mat4 = Matrix<4, 4>;

impl<const C: usize, const R: usize> Matrix<C, R> {
    pub const ZERO: Self = Self {
        rows: [Vector::ZERO; R],
    };

    pub const fn from_rows(rows: [Vector<C>; R]) -> Self {
        Self { rows }
    }

    pub fn identity() -> Self {
        let mut out = Self::ZERO;
        for r in 0..R {
            for c in 0..C {
                if r == c {
                    out.rows[r][c] = Fx::ONE;
                }
            }
        }
        out
    }

    pub fn transpose(&self) -> Matrix<R, C> {
        let mut out = Matrix::<R, C>::ZERO;
        for r in 0..R {
            for c in 0..C {
                out[c][r] = self.rows[r][c];
            }
        }
        out
    }
}

impl<const C: usize, const R: usize> Index<usize> for Matrix<C, R> {
    type Output = Vector<C>;
    fn index(&self, row: usize) -> &Vector<C> {
        &self.rows[row]
    }
}

impl<const C: usize, const R: usize> IndexMut<usize> for Matrix<C, R> {
    fn index_mut(&mut self, row: usize) -> &mut Vector<C> {
        &mut self.rows[row]
    }
}

/// Matrix product. The right operand is transposed first so each output
/// element is a row·row dot product; this is how the row-major layout
/// composes, not an optimization.
impl<const C: usize, const R: usize, const C2: usize> Mul<Matrix<C2, C>> for Matrix<C, R> {
    type Output = Matrix<C2, R>;
    fn mul(self, rhs: Matrix<C2, C>) -> Matrix<C2, R> {
        let t = rhs.transpose();
        let mut out = Matrix::<C2, R>::ZERO;
        for r in 0..R {
            for c in 0..C2 {
                out[r][c] = self.rows[r].dot(t[c]);
            }
        }
        out
    }
}

impl<const C: usize, const R: usize> Mul<Vector<C>> for Matrix<C, R> {
    type Output = Vector<R>;
    fn mul(self, rhs: Vector<C>) -> Vector<R> {
        let mut out = Vector::<R>::ZERO;
        for r in 0..R {
            out[r] = self.rows[r].dot(rhs);
        }
        out
    }
}

impl Mat4 {
    /// Translation along `v`; translation lives in the last column of the
    /// row-major layout so `M * v` applies it after the linear part.
    pub fn translate(v: Vec3) -> Mat4 {
        let mut out = Mat4::identity();
        out[0][3] = v.x();
        out[1][3] = v.y();
        out[2][3] = v.z();
        out
    }

    pub fn scale(v: Vec3) -> Mat4 {
        let mut out = Mat4::identity();
        out[0][0] = v.x();
        out[1][1] = v.y();
        out[2][2] = v.z();
        out
    }

    /// Rotation of `angle_deg` degrees around `axis` (normalized internally).
    ///
    /// The trig runs in f32 through libm; only the final coefficients are
    /// fixed-point.
    pub fn rotation(axis: Vec3, angle_deg: Fx) -> Mat4 {
        let radians = angle_deg.to_f32() * core::f32::consts::PI / 180.0;
        let c = Fx::from_f32(libm::cosf(radians));
        let s = Fx::from_f32(libm::sinf(radians));
        let t = Fx::ONE - c;

        let ax = axis.normalize();
        let (x, y, z) = (ax.x(), ax.y(), ax.z());

        let mut out = Mat4::identity();
        out[0][0] = t * x * x + c;
        out[0][1] = t * x * y - s * z;
        out[0][2] = t * x * z + s * y;

        out[1][0] = t * x * y + s * z;
        out[1][1] = t * y * y + c;
        out[1][2] = t * y * z - s * x;

        out[2][0] = t * x * z - s * y;
        out[2][1] = t * y * z + s * x;
        out[2][2] = t * z * z + c;
        out
    }

    /// Euler rotation in degrees, composed in yaw, pitch, roll order,
    /// matching the quaternion convention.
    pub fn from_euler(rot_deg: Vec3) -> Mat4 {
        Mat4::rotation(Vec3::UP, rot_deg.y())
            * Mat4::rotation(Vec3::FORWARD, rot_deg.z())
            * Mat4::rotation(Vec3::RIGHT, rot_deg.x())
    }

    /// Perspective projection with a vertical field of view in degrees and
    /// clip-space z mapped to [0, 1].
    pub fn perspective(fov_deg: Fx, aspect: Fx, near: Fx, far: Fx) -> Mat4 {
        let half_fov = fov_deg.to_f32() * 0.5 * core::f32::consts::PI / 180.0;
        let y_scale = 1.0 / libm::tanf(half_fov);
        let x_scale = y_scale / aspect.to_f32();
        let nf = near.to_f32();
        let ff = far.to_f32();

        let mut out = Mat4::ZERO;
        out[0][0] = Fx::from_f32(x_scale);
        out[1][1] = Fx::from_f32(y_scale);
        out[2][2] = Fx::from_f32(-ff / (ff - nf));
        out[2][3] = Fx::from_f32(ff * nf / (ff - nf));
        out[3][2] = -Fx::ONE;
        out
    }

    /// Transform a point, i.e. `M * (v, 1)`.
    pub fn transform_point(&self, v: Vec3) -> Vec4 {
        *self * Vec4::from_vec3(v, Fx::ONE)
    }

    /// Transform a direction, i.e. `M * (v, 0)`: translation is ignored.
    pub fn transform_direction(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(v, Fx::ZERO)).xyz()
    }

    /// Column `i` as a direction vector (basis extraction).
    pub fn column(&self, i: usize) -> Vec3 {
        vec3(self.rows[0][i], self.rows[1][i], self.rows[2][i])
    }
}
