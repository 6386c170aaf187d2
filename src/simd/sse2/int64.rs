//! `i64` and `u64` vectors filling an `__m128i` register.
//!
//! SSE2 has 64-bit add and subtract but no 64-bit multiply, compare or arithmetic
//! shift. Multiply goes lane by lane; absolute value builds the sign mask from the
//! high 32-bit half of each lane.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::{
    error::lane_index_panic,
    simd::{
        ops::{impl_arithmetic_ops, impl_signed_ops, impl_vector_common},
        traits::{SimdArithmetic, SimdSigned, SimdVector},
    },
};

macro_rules! impl_epi64_vector {
    ($(#[$doc:meta])* $name:ident, $elem:ty) => {
        $(#[$doc])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name {
            elements: __m128i,
        }

        impl $name {
            #[inline(always)]
            pub fn make(e0: $elem, e1: $elem) -> Self {
                Self::from_array([e0, e1])
            }

            /// Builds a vector from its lanes, least significant first.
            #[inline(always)]
            pub fn from_array(lanes: [$elem; 2]) -> Self {
                // SAFETY: the array holds exactly two readable elements.
                unsafe { Self::make_load(lanes.as_ptr()) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [$elem; 2] {
                let mut lanes = [0; 2];
                // SAFETY: the array holds exactly two writable elements.
                unsafe { self.store(lanes.as_mut_ptr()) };
                lanes
            }
        }

        impl SimdVector for $name {
            type Element = $elem;

            const WIDTH: usize = 2;

            #[inline(always)]
            fn make_repeating_element(value: $elem) -> Self {
                Self::from_array([value; 2])
            }

            #[inline(always)]
            fn make_zero() -> Self {
                Self {
                    elements: unsafe { _mm_setzero_si128() },
                }
            }

            #[inline(always)]
            unsafe fn make_load(ptr: *const $elem) -> Self {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                Self {
                    elements: _mm_loadu_si128(ptr as *const __m128i),
                }
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut $elem) {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                _mm_storeu_si128(ptr as *mut __m128i, self.elements)
            }

            #[inline(always)]
            #[track_caller]
            fn get_element(self, index: usize) -> $elem {
                match self.to_array().get(index) {
                    Some(&lane) => lane,
                    None => lane_index_panic(index, Self::WIDTH),
                }
            }

            #[inline(always)]
            #[track_caller]
            fn set_element(&mut self, index: usize, value: $elem) {
                let mut lanes = self.to_array();
                match lanes.get_mut(index) {
                    Some(lane) => *lane = value,
                    None => lane_index_panic(index, Self::WIDTH),
                }
                *self = Self::from_array(lanes);
            }
        }

        impl SimdArithmetic for $name {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_add_epi64(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_sub_epi64(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                let (a, b) = (self.to_array(), rhs.to_array());
                Self::make(a[0].wrapping_mul(b[0]), a[1].wrapping_mul(b[1]))
            }
        }

        impl_vector_common!($name, $elem, 2);
        impl_arithmetic_ops!($name);
    };
}

impl_epi64_vector!(
    /// Two `i64` lanes.
    Int64x2,
    i64
);

impl_epi64_vector!(
    /// Two `u64` lanes.
    UInt64x2,
    u64
);

impl SimdSigned for Int64x2 {
    #[inline(always)]
    fn negate(self) -> Self {
        Self {
            elements: unsafe { _mm_sub_epi64(_mm_setzero_si128(), self.elements) },
        }
    }

    /// `(v ^ s) - s`, with `s` the sign of each lane copied from its high half.
    #[inline(always)]
    fn absolute(self) -> Self {
        Self {
            elements: unsafe {
                let high_sign = _mm_srai_epi32::<31>(self.elements);
                let sign = _mm_shuffle_epi32::<0b11_11_01_01>(high_sign);
                _mm_sub_epi64(_mm_xor_si128(self.elements, sign), sign)
            },
        }
    }
}

impl_signed_ops!(Int64x2);
