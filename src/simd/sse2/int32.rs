//! `i32` vectors in an `__m128i` register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::{
    ops::{impl_arithmetic_ops, impl_signed_ops},
    traits::{SimdArithmetic, SimdMinMax, SimdSigned, SimdVector},
};

use super::{mullo_epi32, select_si128};

impl_epi32_vector!(
    /// Two `i32` lanes; lanes 2 and 3 of the register are padding.
    Int32x2,
    i32,
    2,
    [e0, e1]
);

impl_epi32_vector!(
    /// Three `i32` lanes; lane 3 of the register is padding.
    Int32x3,
    i32,
    3,
    [e0, e1, e2]
);

impl_epi32_vector!(
    /// Four `i32` lanes filling the register.
    Int32x4,
    i32,
    4,
    [e0, e1, e2, e3]
);

macro_rules! impl_int32_ops {
    ($name:ident) => {
        impl SimdArithmetic for $name {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_add_epi32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_sub_epi32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { mullo_epi32(self.elements, rhs.elements) },
                }
            }
        }

        impl SimdSigned for $name {
            #[inline(always)]
            fn negate(self) -> Self {
                Self {
                    elements: unsafe { _mm_sub_epi32(_mm_setzero_si128(), self.elements) },
                }
            }

            /// `(v ^ s) - s` with `s` the sign broadcast; `i32::MIN` maps to itself.
            #[inline(always)]
            fn absolute(self) -> Self {
                Self {
                    elements: unsafe {
                        let sign = _mm_srai_epi32::<31>(self.elements);
                        _mm_sub_epi32(_mm_xor_si128(self.elements, sign), sign)
                    },
                }
            }
        }

        impl SimdMinMax for $name {
            #[inline(always)]
            fn minimum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe {
                        let greater = _mm_cmpgt_epi32(self.elements, rhs.elements);
                        select_si128(greater, rhs.elements, self.elements)
                    },
                }
            }

            #[inline(always)]
            fn maximum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe {
                        let greater = _mm_cmpgt_epi32(self.elements, rhs.elements);
                        select_si128(greater, self.elements, rhs.elements)
                    },
                }
            }
        }

        impl_arithmetic_ops!($name);
        impl_signed_ops!($name);
    };
}

impl_int32_ops!(Int32x2);
impl_int32_ops!(Int32x3);
impl_int32_ops!(Int32x4);
