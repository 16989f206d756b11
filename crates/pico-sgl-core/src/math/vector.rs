//! Fixed-size vectors of fixed-point components.

use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use super::Fx;

/// An `N`-component vector of [`Fx`] values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Vector<const N: usize>(pub [Fx; N]);

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self([Fx::default(); N])
    }
}

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

pub const fn vec2(x: Fx, y: Fx) -> Vec2 {
    Vector([x, y])
}

pub const fn vec3(x: Fx, y: Fx, z: Fx) -> Vec3 {
    Vector([x, y, z])
}

pub const fn vec4(x: Fx, y: Fx, z: Fx, w: Fx) -> Vec4 {
    Vector([x, y, z, w])
}

impl<const N: usize> Vector<N> {
    pub const ZERO: Self = Self([Fx::ZERO; N]);

    /// All components set to `value`.
    pub const fn splat(value: Fx) -> Self {
        Self([value; N])
    }

    pub fn dot(self, other: Self) -> Fx {
        let mut acc = Fx::ZERO;
        for i in 0..N {
            acc += self.0[i] * other.0[i];
        }
        acc
    }

    /// Euclidean length.
    ///
    /// Accumulates the squared sum in `f32` so that components near the
    /// fixed-point multiply bound do not overflow before the root.
    pub fn magnitude(self) -> Fx {
        let mut acc = 0.0f32;
        for i in 0..N {
            let c = self.0[i].to_f32();
            acc += c * c;
        }
        Fx::from_f32(libm::sqrtf(acc))
    }

    /// Unit-length copy. A zero-magnitude input returns the zero vector;
    /// this is defined behavior, not an error.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == Fx::ZERO {
            return Self::ZERO;
        }
        let mut out = Self::ZERO;
        for i in 0..N {
            out.0[i] = self.0[i] / mag;
        }
        out
    }
}

impl Vec2 {
    pub const fn x(self) -> Fx {
        self.0[0]
    }
    pub const fn y(self) -> Fx {
        self.0[1]
    }
}

impl Vec3 {
    pub const UP: Vec3 = vec3(Fx::ZERO, Fx::ONE, Fx::ZERO);
    pub const FORWARD: Vec3 = vec3(Fx::ZERO, Fx::ZERO, Fx::ONE);
    pub const RIGHT: Vec3 = vec3(Fx::ONE, Fx::ZERO, Fx::ZERO);

    pub const fn x(self) -> Fx {
        self.0[0]
    }
    pub const fn y(self) -> Fx {
        self.0[1]
    }
    pub const fn z(self) -> Fx {
        self.0[2]
    }

    pub const fn xy(self) -> Vec2 {
        vec2(self.0[0], self.0[1])
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        vec3(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl Vec4 {
    pub const fn x(self) -> Fx {
        self.0[0]
    }
    pub const fn y(self) -> Fx {
        self.0[1]
    }
    pub const fn z(self) -> Fx {
        self.0[2]
    }
    pub const fn w(self) -> Fx {
        self.0[3]
    }

    pub const fn xyz(self) -> Vec3 {
        vec3(self.0[0], self.0[1], self.0[2])
    }

    /// Extend a [`Vec3`] with an explicit w component.
    pub const fn from_vec3(v: Vec3, w: Fx) -> Vec4 {
        vec4(v.0[0], v.0[1], v.0[2], w)
    }

    /// Perspective divide. When w is zero the xyz part is returned
    /// unscaled rather than dividing.
    pub fn homogenize(self) -> Vec3 {
        let w = self.w();
        if w == Fx::ZERO {
            return self.xyz();
        }
        vec3(self.x() / w, self.y() / w, self.z() / w)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = Fx;
    fn index(&self, i: usize) -> &Fx {
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, i: usize) -> &mut Fx {
        &mut self.0[i]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..N {
            out.0[i] += rhs.0[i];
        }
        out
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..N {
            out.0[i] -= rhs.0[i];
        }
        out
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    fn neg(self) -> Self {
        let mut out = self;
        for i in 0..N {
            out.0[i] = -out.0[i];
        }
        out
    }
}

impl<const N: usize> Mul<Fx> for Vector<N> {
    type Output = Self;
    fn mul(self, rhs: Fx) -> Self {
        let mut out = self;
        for i in 0..N {
            out.0[i] *= rhs;
        }
        out
    }
}

impl<const N: usize> Div<Fx> for Vector<N> {
    type Output = Self;
    fn div(self, rhs: Fx) -> Self {
        let mut out = self;
        for i in 0..N {
            out.0[i] /= rhs;
        }
        out
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
