//! 32-bit signed fixed-point scalars with a compile-time fractional bit count.
//!
//! `Q<FRAC>` stores a value as `i32` scaled by `2^FRAC`. Addition and
//! subtraction act on the raw integer directly; multiplication and division
//! widen to `i64` before rescaling so a single operation never loses the
//! intermediate. There is no saturation: products whose magnitude exceeds
//! roughly `sqrt(2^(31 - FRAC))` wrap silently, and bounding inputs is the
//! caller's responsibility.

#![no_std]

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Q6.10: coarse precision, widest integer range.
pub type Q10 = Q<10>;
/// Q4.12: mid precision.
pub type Q12 = Q<12>;
/// Q16.16: the default engine precision.
pub type Q16 = Q<16>;

/// Fixed-point value with `FRAC` fractional bits in an `i32`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Q<const FRAC: u32> {
    bits: i32,
}

impl<const FRAC: u32> Q<FRAC> {
    pub const ZERO: Self = Self { bits: 0 };
    pub const ONE: Self = Self { bits: 1 << FRAC };
    pub const HALF: Self = Self { bits: 1 << (FRAC - 1) };
    pub const MIN: Self = Self { bits: i32::MIN };
    pub const MAX: Self = Self { bits: i32::MAX };

    const FRAC_MASK: i32 = (1 << FRAC) - 1;

    /// Reinterpret a raw scaled integer as a fixed-point value.
    pub const fn from_bits(bits: i32) -> Self {
        Self { bits }
    }

    /// The raw scaled integer.
    pub const fn to_bits(self) -> i32 {
        self.bits
    }

    pub const fn from_int(value: i32) -> Self {
        Self {
            bits: value << FRAC,
        }
    }

    pub const fn from_f32(value: f32) -> Self {
        Self {
            bits: (value * (1u32 << FRAC) as f32) as i32,
        }
    }

    /// Truncate to integer. The arithmetic right shift biases negative
    /// fractional values toward negative infinity: `(-1.5).to_i32() == -2`.
    pub const fn to_i32(self) -> i32 {
        self.bits >> FRAC
    }

    pub const fn to_f32(self) -> f32 {
        self.bits as f32 / (1u32 << FRAC) as f32
    }

    pub const fn abs(self) -> Self {
        if self.bits < 0 {
            Self { bits: -self.bits }
        } else {
            self
        }
    }

    /// Largest integral value not greater than `self`.
    pub const fn floor(self) -> Self {
        Self {
            bits: self.bits & !Self::FRAC_MASK,
        }
    }

    /// Smallest integral value not less than `self`.
    pub const fn ceil(self) -> Self {
        if self.bits & Self::FRAC_MASK == 0 {
            self
        } else {
            Self {
                bits: (self.bits & !Self::FRAC_MASK) + (1 << FRAC),
            }
        }
    }

    /// Linear interpolation from `self` to `other` by `t`.
    pub fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    /// Newton-Raphson square root, iterated until the correction drops
    /// below a fixed threshold. Negative input yields zero.
    pub fn sqrt(self) -> Self {
        if self <= Self::ZERO {
            return Self::ZERO;
        }
        let threshold = Self::from_f32(0.01);
        let two = Self::from_int(2);
        let mut x = self;
        // Bounded iteration count: convergence is quadratic, 32 rounds is
        // far beyond what any representable input needs.
        for _ in 0..32 {
            let dx = (x * x - self) / (x * two);
            x = x - dx;
            if dx.abs() <= threshold {
                break;
            }
        }
        x
    }
}

impl<const FRAC: u32> Add for Q<FRAC> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            bits: self.bits.wrapping_add(rhs.bits),
        }
    }
}

impl<const FRAC: u32> Sub for Q<FRAC> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            bits: self.bits.wrapping_sub(rhs.bits),
        }
    }
}

impl<const FRAC: u32> Mul for Q<FRAC> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Widen before rescaling: the product of two 32-bit raw values
        // needs 64 bits until the shift brings it back into range.
        Self {
            bits: ((self.bits as i64 * rhs.bits as i64) >> FRAC) as i32,
        }
    }
}

impl<const FRAC: u32> Div for Q<FRAC> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self {
            bits: (((self.bits as i64) << FRAC) / rhs.bits as i64) as i32,
        }
    }
}

impl<const FRAC: u32> Rem for Q<FRAC> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self {
            bits: self.bits % rhs.bits,
        }
    }
}

impl<const FRAC: u32> Neg for Q<FRAC> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            bits: self.bits.wrapping_neg(),
        }
    }
}

impl<const FRAC: u32> AddAssign for Q<FRAC> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const FRAC: u32> SubAssign for Q<FRAC> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const FRAC: u32> MulAssign for Q<FRAC> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const FRAC: u32> DivAssign for Q<FRAC> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const FRAC: u32> fmt::Debug for Q<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

impl<const FRAC: u32> fmt::Display for Q<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

/// Ordering helpers mirroring `Ord` for call sites that want free functions.
pub fn min<const FRAC: u32>(a: Q<FRAC>, b: Q<FRAC>) -> Q<FRAC> {
    match a.cmp(&b) {
        Ordering::Greater => b,
        _ => a,
    }
}

pub fn max<const FRAC: u32>(a: Q<FRAC>, b: Q<FRAC>) -> Q<FRAC> {
    match a.cmp(&b) {
        Ordering::Less => b,
        _ => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_round_trip() {
        assert_eq!(Q16::from_int(5).to_i32(), 5);
        assert_eq!(Q16::from_int(-5).to_i32(), -5);
        assert_eq!(Q10::from_int(17).to_i32(), 17);
    }

    #[test]
    fn float_round_trip_within_precision() {
        let v = Q16::from_f32(3.25);
        assert!((v.to_f32() - 3.25).abs() < 1.0 / 65536.0);
        let v = Q12::from_f32(-0.75);
        assert!((v.to_f32() + 0.75).abs() < 1.0 / 4096.0);
    }

    #[test]
    fn add_then_sub_is_exact() {
        let a = Q16::from_f32(12.375);
        let b = Q16::from_f32(-3.0625);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn mul_then_div_round_trips_exactly_for_binary_fractions() {
        let a = Q16::from_f32(7.5);
        let b = Q16::from_f32(0.25);
        assert_eq!((a * b) / b, a);
    }

    #[test]
    fn mul_then_div_stays_within_truncation_error() {
        // Non-binary fractions truncate in the multiply; dividing back
        // amplifies that by 1/b, so allow a handful of raw bits.
        let a = Q16::from_f32(7.5);
        let b = Q16::from_f32(0.3);
        let round_trip = (a * b) / b;
        assert!((round_trip - a).abs().to_bits() <= 8);
    }

    #[test]
    fn mul_widens_through_i64() {
        // 100 * 100 = 10_000: raw product 100<<16 * 100<<16 overflows i32
        // but the i64 intermediate keeps it exact.
        let v = Q16::from_int(100);
        assert_eq!((v * v).to_i32(), 10_000);
    }

    #[test]
    fn negative_truncation_biases_down() {
        assert_eq!(Q16::from_f32(-1.5).to_i32(), -2);
        assert_eq!(Q16::from_f32(1.5).to_i32(), 1);
    }

    #[test]
    fn floor_ceil() {
        assert_eq!(Q16::from_f32(2.7).floor(), Q16::from_int(2));
        assert_eq!(Q16::from_f32(-2.3).floor(), Q16::from_int(-3));
        assert_eq!(Q16::from_f32(2.3).ceil(), Q16::from_int(3));
        assert_eq!(Q16::from_int(2).ceil(), Q16::from_int(2));
    }

    #[test]
    fn modulo_matches_raw_remainder() {
        let a = Q16::from_f32(7.5);
        let b = Q16::from_int(2);
        assert!(((a % b).to_f32() - 1.5).abs() < 1.0 / 65536.0);
        // Truncated remainder keeps the dividend's sign.
        let neg = Q16::from_f32(-7.5);
        assert!(((neg % b).to_f32() + 1.5).abs() < 1.0 / 65536.0);
    }

    #[test]
    fn sqrt_converges() {
        for &(input, expected) in &[(4.0f32, 2.0f32), (2.0, 1.41421), (0.25, 0.5), (100.0, 10.0)] {
            let got = Q16::from_f32(input).sqrt().to_f32();
            assert!((got - expected).abs() < 0.02, "sqrt({input}) = {got}");
        }
    }

    #[test]
    fn sqrt_of_zero_and_negative() {
        assert_eq!(Q16::ZERO.sqrt(), Q16::ZERO);
        assert_eq!(Q16::from_int(-4).sqrt(), Q16::ZERO);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Q16::from_int(10);
        let b = Q16::from_int(20);
        assert_eq!(a.lerp(b, Q16::ZERO), a);
        assert_eq!(a.lerp(b, Q16::ONE), b);
        assert_eq!(a.lerp(b, Q16::HALF), Q16::from_int(15));
    }

    #[test]
    fn clamp_via_ord() {
        let lo = Q16::from_int(-1);
        let hi = Q16::ONE;
        assert_eq!(Q16::from_int(4).clamp(lo, hi), hi);
        assert_eq!(Q16::from_int(-4).clamp(lo, hi), lo);
    }

    #[test]
    fn variants_share_semantics() {
        assert_eq!(Q10::from_int(3) * Q10::from_int(4), Q10::from_int(12));
        assert_eq!(Q12::from_int(3) * Q12::from_int(4), Q12::from_int(12));
        assert_eq!(Q16::from_int(3) * Q16::from_int(4), Q16::from_int(12));
    }
}
