//! `i64` and `u64` vectors in NEON `q` registers.
//!
//! AArch64 has no 64-bit lane multiply, so `multiply` runs per lane.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::{
    error::lane_index_panic,
    simd::{
        ops::{impl_arithmetic_ops, impl_signed_ops, impl_vector_common},
        traits::{SimdArithmetic, SimdSigned, SimdVector},
    },
};

macro_rules! impl_64_bit_vector {
    (
        $(#[$doc:meta])* $name:ident, $elem:ty, $register:ty,
        dup: $dup:ident, load: $load:ident, store: $store:ident,
        get: $get:ident, set: $set:ident, add: $add:ident, sub: $sub:ident
    ) => {
        $(#[$doc])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name {
            elements: $register,
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
                Self {
                    elements: unsafe { $dup(value) },
                }
            }

            #[inline(always)]
            unsafe fn make_load(ptr: *const $elem) -> Self {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                Self {
                    elements: $load(ptr),
                }
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut $elem) {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                $store(ptr, self.elements)
            }

            #[inline(always)]
            #[track_caller]
            fn get_element(self, index: usize) -> $elem {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                unsafe { get_lane!($get, self.elements, index, [0, 1]) }
            }

            #[inline(always)]
            #[track_caller]
            fn set_element(&mut self, index: usize, value: $elem) {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                self.elements = unsafe { set_lane!($set, value, self.elements, index, [0, 1]) };
            }
        }

        impl SimdArithmetic for $name {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $add(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $sub(self.elements, rhs.elements) },
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

impl_64_bit_vector!(
    /// Two `i64` lanes.
    Int64x2, i64, int64x2_t,
    dup: vdupq_n_s64, load: vld1q_s64, store: vst1q_s64,
    get: vgetq_lane_s64, set: vsetq_lane_s64, add: vaddq_s64, sub: vsubq_s64
);

impl_64_bit_vector!(
    /// Two `u64` lanes.
    UInt64x2, u64, uint64x2_t,
    dup: vdupq_n_u64, load: vld1q_u64, store: vst1q_u64,
    get: vgetq_lane_u64, set: vsetq_lane_u64, add: vaddq_u64, sub: vsubq_u64
);

impl SimdSigned for Int64x2 {
    #[inline(always)]
    fn negate(self) -> Self {
        Self {
            elements: unsafe { vnegq_s64(self.elements) },
        }
    }

    #[inline(always)]
    fn absolute(self) -> Self {
        Self {
            elements: unsafe { vabsq_s64(self.elements) },
        }
    }
}

impl_signed_ops!(Int64x2);
