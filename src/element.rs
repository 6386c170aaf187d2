//! Scalar element types and the lane-level arithmetic every backend agrees on.
//!
//! The aliases name the five element families the vectors are built from. The
//! traits describe what a single lane can do; the scalar fallback backend is written
//! once on top of them, and the SIMD backends call into them wherever the hardware
//! has no native instruction (64-bit multiply, SSE2 per-lane shifts).

use std::fmt::Debug;

use num::traits::{CheckedShl, CheckedShr, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use num::{Float, One, Zero};

/// 32-bit IEEE-754 floating point lane.
pub type Float32 = f32;

/// 32-bit two's-complement signed integer lane.
pub type Int32 = i32;

/// 32-bit unsigned integer lane.
pub type UInt32 = u32;

/// 64-bit two's-complement signed integer lane.
pub type Int64 = i64;

/// 64-bit unsigned integer lane.
pub type UInt64 = u64;

/// A scalar that can occupy one lane of a vector.
///
/// Integer arithmetic wraps modulo the element width, matching what packed SIMD
/// integer instructions do; it never saturates and never panics on overflow.
pub trait Element: Copy + Debug + Default + PartialEq + Zero + One + Send + Sync + 'static {
    /// Width of the element in bits.
    const BITS: u32;

    /// Family prefix of the vector type names (`Float32` in `Float32x3`).
    const FAMILY: &'static str;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
}

/// Elements with a meaningful negation and absolute value.
pub trait SignedElement: Element {
    /// Negation; `MIN` wraps to itself for integers.
    fn lane_neg(self) -> Self;

    /// Absolute value; `MIN` wraps to itself for integers, floats clear the sign bit.
    fn lane_abs(self) -> Self;
}

/// Floating point elements, the only ones that divide.
pub trait FloatElement: SignedElement + Float {
    fn lane_div(self, rhs: Self) -> Self;
}

/// Elements with a total lane-wise minimum and maximum.
///
/// For floats this is IEEE-754 `minNum`/`maxNum`: a NaN operand is ignored in favour
/// of the other operand, and only two NaNs produce NaN.
pub trait OrderedElement: Element {
    fn lane_min(self, rhs: Self) -> Self;
    fn lane_max(self, rhs: Self) -> Self;
}

/// Unsigned integer elements that support bitwise operations and logical shifts.
pub trait BitElement: Element {
    fn lane_not(self) -> Self;
    fn lane_and(self, rhs: Self) -> Self;
    fn lane_or(self, rhs: Self) -> Self;
    fn lane_xor(self, rhs: Self) -> Self;

    /// Logical left shift. Amounts of `BITS` or more shift every bit out.
    fn lane_shl(self, amount: Self) -> Self;

    /// Logical right shift. Amounts of `BITS` or more shift every bit out.
    fn lane_shr(self, amount: Self) -> Self;
}

macro_rules! impl_integer_element {
    ($($t:ty => $family:literal),*) => {
        $(
            impl Element for $t {
                const BITS: u32 = <$t>::BITS;

                const FAMILY: &'static str = $family;

                #[inline(always)]
                fn lane_add(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }

                #[inline(always)]
                fn lane_sub(self, rhs: Self) -> Self {
                    WrappingSub::wrapping_sub(&self, &rhs)
                }

                #[inline(always)]
                fn lane_mul(self, rhs: Self) -> Self {
                    WrappingMul::wrapping_mul(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_signed_integer_element {
    ($($t:ty),*) => {
        $(
            impl SignedElement for $t {
                #[inline(always)]
                fn lane_neg(self) -> Self {
                    WrappingNeg::wrapping_neg(&self)
                }

                #[inline(always)]
                fn lane_abs(self) -> Self {
                    self.wrapping_abs()
                }
            }
        )*
    };
}

macro_rules! impl_ordered_integer_element {
    ($($t:ty),*) => {
        $(
            impl OrderedElement for $t {
                #[inline(always)]
                fn lane_min(self, rhs: Self) -> Self {
                    Ord::min(self, rhs)
                }

                #[inline(always)]
                fn lane_max(self, rhs: Self) -> Self {
                    Ord::max(self, rhs)
                }
            }
        )*
    };
}

impl_integer_element!(
    i32 => "Int32",
    u32 => "UInt32",
    i64 => "Int64",
    u64 => "UInt64"
);
impl_signed_integer_element!(i32, i64);
impl_ordered_integer_element!(i32, u32);

impl Element for f32 {
    const BITS: u32 = 32;

    const FAMILY: &'static str = "Float32";

    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

impl SignedElement for f32 {
    #[inline(always)]
    fn lane_neg(self) -> Self {
        -self
    }

    #[inline(always)]
    fn lane_abs(self) -> Self {
        f32::from_bits(self.to_bits() & 0x7FFF_FFFF)
    }
}

impl FloatElement for f32 {
    #[inline(always)]
    fn lane_div(self, rhs: Self) -> Self {
        self / rhs
    }
}

impl OrderedElement for f32 {
    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        f32::min(self, rhs)
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        f32::max(self, rhs)
    }
}

impl BitElement for u32 {
    #[inline(always)]
    fn lane_not(self) -> Self {
        !self
    }

    #[inline(always)]
    fn lane_and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline(always)]
    fn lane_or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline(always)]
    fn lane_xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline(always)]
    fn lane_shl(self, amount: Self) -> Self {
        CheckedShl::checked_shl(&self, amount).unwrap_or(0)
    }

    #[inline(always)]
    fn lane_shr(self, amount: Self) -> Self {
        CheckedShr::checked_shr(&self, amount).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(i32::MAX.lane_add(1), i32::MIN);
        assert_eq!(0u32.lane_sub(1), u32::MAX);
        assert_eq!(i64::MAX.lane_mul(2), -2);
        assert_eq!(u64::MAX.lane_add(2), 1);
    }

    #[test]
    fn test_signed_min_wraps() {
        assert_eq!(i32::MIN.lane_neg(), i32::MIN);
        assert_eq!(i32::MIN.lane_abs(), i32::MIN);
        assert_eq!(i64::MIN.lane_abs(), i64::MIN);
        assert_eq!((-5i64).lane_abs(), 5);
    }

    #[test]
    fn test_float_abs_clears_sign_bit() {
        assert_eq!((-0.0f32).lane_abs().to_bits(), 0);
        assert_eq!((-2.5f32).lane_abs(), 2.5);
        assert!(f32::NAN.lane_abs().is_nan());
    }

    #[test]
    fn test_float_min_max_ignore_single_nan() {
        assert_eq!(f32::NAN.lane_min(1.0), 1.0);
        assert_eq!(1.0f32.lane_max(f32::NAN), 1.0);
        assert!(f32::NAN.lane_min(f32::NAN).is_nan());
    }

    #[test]
    fn test_shifts_are_logical() {
        assert_eq!(0x8000_0000u32.lane_shr(31), 1);
        assert_eq!(1u32.lane_shl(31), 0x8000_0000);
        assert_eq!(u32::MAX.lane_shl(32), 0);
        assert_eq!(u32::MAX.lane_shr(40), 0);
    }

    #[test]
    fn test_element_bits() {
        assert_eq!(<f32 as Element>::BITS, 32);
        assert_eq!(<i32 as Element>::BITS, 32);
        assert_eq!(<u64 as Element>::BITS, 64);
    }

    #[test]
    fn test_element_family_names() {
        assert_eq!(<f32 as Element>::FAMILY, "Float32");
        assert_eq!(<u32 as Element>::FAMILY, "UInt32");
        assert_eq!(<i64 as Element>::FAMILY, "Int64");
    }
}
