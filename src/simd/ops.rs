//! Operator and formatting impls shared by the register-backed vector types.
//!
//! Each backend implements the operation traits by hand, with its own intrinsics.
//! Everything derivable from those traits (operators, `Debug`, `PartialEq`,
//! `Default`, array conversions) is stamped out here so that all backends expose
//! the same surface.

// A fallback-only build never stamps these out.
#![cfg_attr(fallback, allow(unused_macros, unused_imports))]

/// `Debug`, `PartialEq`, `Default` and `[T; N]` conversions, over logical lanes only.
///
/// Requires inherent `to_array` / `from_array` on the type.
macro_rules! impl_vector_common {
    ($name:ident, $elem:ty, $width:literal) => {
        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.to_array())
            }
        }

        impl PartialEq for $name {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                self.to_array() == other.to_array()
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                <Self as $crate::simd::traits::SimdVector>::make_zero()
            }
        }

        impl From<[$elem; $width]> for $name {
            #[inline(always)]
            fn from(lanes: [$elem; $width]) -> Self {
                Self::from_array(lanes)
            }
        }

        impl From<$name> for [$elem; $width] {
            #[inline(always)]
            fn from(vector: $name) -> Self {
                vector.to_array()
            }
        }
    };
}

/// `+`, `-`, `*` and their assigning forms.
macro_rules! impl_arithmetic_ops {
    ($name:ident) => {
        impl ::core::ops::Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdArithmetic::add(self, rhs)
            }
        }

        impl ::core::ops::Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdArithmetic::subtract(self, rhs)
            }
        }

        impl ::core::ops::Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdArithmetic::multiply(self, rhs)
            }
        }

        impl ::core::ops::AddAssign for $name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::core::ops::SubAssign for $name {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl ::core::ops::MulAssign for $name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }
    };
}

/// Unary `-`.
macro_rules! impl_signed_ops {
    ($name:ident) => {
        impl ::core::ops::Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self::Output {
                $crate::simd::traits::SimdSigned::negate(self)
            }
        }
    };
}

/// `/` and `/=`.
macro_rules! impl_divide_ops {
    ($name:ident) => {
        impl ::core::ops::Div for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdDivide::divide(self, rhs)
            }
        }

        impl ::core::ops::DivAssign for $name {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}

/// `!`, `&`, `|`, `^`, and `<<` / `>>` by vector or by scalar amount.
macro_rules! impl_bitwise_ops {
    ($name:ident, $elem:ty) => {
        impl ::core::ops::Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self::Output {
                $crate::simd::traits::SimdBitwise::bitwise_not(self)
            }
        }

        impl ::core::ops::BitAnd for $name {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdBitwise::bitwise_and(self, rhs)
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdBitwise::bitwise_or(self, rhs)
            }
        }

        impl ::core::ops::BitXor for $name {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdBitwise::bitwise_exclusive_or(self, rhs)
            }
        }

        impl ::core::ops::BitAndAssign for $name {
            #[inline(always)]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl ::core::ops::BitOrAssign for $name {
            #[inline(always)]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl ::core::ops::BitXorAssign for $name {
            #[inline(always)]
            fn bitxor_assign(&mut self, rhs: Self) {
                *self = *self ^ rhs;
            }
        }

        impl ::core::ops::Shl for $name {
            type Output = Self;

            #[inline(always)]
            fn shl(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdShift::shift_left_element_wise(self, rhs)
            }
        }

        impl ::core::ops::Shr for $name {
            type Output = Self;

            #[inline(always)]
            fn shr(self, rhs: Self) -> Self::Output {
                $crate::simd::traits::SimdShift::shift_right_element_wise(self, rhs)
            }
        }

        impl ::core::ops::Shl<$elem> for $name {
            type Output = Self;

            #[inline(always)]
            fn shl(self, amount: $elem) -> Self::Output {
                $crate::simd::traits::SimdShift::shift_left(self, amount)
            }
        }

        impl ::core::ops::Shr<$elem> for $name {
            type Output = Self;

            #[inline(always)]
            fn shr(self, amount: $elem) -> Self::Output {
                $crate::simd::traits::SimdShift::shift_right(self, amount)
            }
        }
    };
}

pub(crate) use impl_arithmetic_ops;
pub(crate) use impl_bitwise_ops;
pub(crate) use impl_divide_ops;
pub(crate) use impl_signed_ops;
pub(crate) use impl_vector_common;
