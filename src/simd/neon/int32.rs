//! `i32` vectors in NEON registers.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::{
    error::lane_index_panic,
    simd::{
        ops::{impl_arithmetic_ops, impl_signed_ops, impl_vector_common},
        traits::{SimdArithmetic, SimdMinMax, SimdSigned, SimdVector},
    },
};

/// Two `i32` lanes in a 64-bit register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Int32x2 {
    elements: int32x2_t,
}

impl Int32x2 {
    #[inline(always)]
    pub fn make(e0: i32, e1: i32) -> Self {
        Self::from_array([e0, e1])
    }

    /// Builds a vector from its lanes, least significant first.
    #[inline(always)]
    pub fn from_array(lanes: [i32; 2]) -> Self {
        // SAFETY: the array holds exactly two readable elements.
        unsafe { Self::make_load(lanes.as_ptr()) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [i32; 2] {
        let mut lanes = [0; 2];
        // SAFETY: the array holds exactly two writable elements.
        unsafe { self.store(lanes.as_mut_ptr()) };
        lanes
    }
}

impl SimdVector for Int32x2 {
    type Element = i32;

    const WIDTH: usize = 2;

    #[inline(always)]
    fn make_repeating_element(value: i32) -> Self {
        Self {
            elements: unsafe { vdup_n_s32(value) },
        }
    }

    #[inline(always)]
    unsafe fn make_load(ptr: *const i32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: vld1_s32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut i32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        vst1_s32(ptr, self.elements)
    }

    #[inline(always)]
    #[track_caller]
    fn get_element(self, index: usize) -> i32 {
        if index >= Self::WIDTH {
            lane_index_panic(index, Self::WIDTH);
        }

        unsafe { get_lane!(vget_lane_s32, self.elements, index, [0, 1]) }
    }

    #[inline(always)]
    #[track_caller]
    fn set_element(&mut self, index: usize, value: i32) {
        if index >= Self::WIDTH {
            lane_index_panic(index, Self::WIDTH);
        }

        self.elements = unsafe { set_lane!(vset_lane_s32, value, self.elements, index, [0, 1]) };
    }
}

impl SimdArithmetic for Int32x2 {
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vadd_s32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vsub_s32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmul_s32(self.elements, rhs.elements) },
        }
    }
}

impl SimdSigned for Int32x2 {
    #[inline(always)]
    fn negate(self) -> Self {
        Self {
            elements: unsafe { vneg_s32(self.elements) },
        }
    }

    #[inline(always)]
    fn absolute(self) -> Self {
        Self {
            elements: unsafe { vabs_s32(self.elements) },
        }
    }
}

impl SimdMinMax for Int32x2 {
    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmin_s32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmax_s32(self.elements, rhs.elements) },
        }
    }
}

impl_vector_common!(Int32x2, i32, 2);
impl_arithmetic_ops!(Int32x2);
impl_signed_ops!(Int32x2);

macro_rules! impl_int32_q_vector {
    ($(#[$doc:meta])* $name:ident, $width:literal, [$($lane:ident),+]) => {
        $(#[$doc])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name {
            elements: int32x4_t,
        }

        impl $name {
            #[inline(always)]
            pub fn make($($lane: i32),+) -> Self {
                Self::from_array([$($lane),+])
            }

            /// Builds a vector from its lanes, least significant first.
            #[inline(always)]
            pub fn from_array(lanes: [i32; $width]) -> Self {
                // SAFETY: the array holds exactly WIDTH readable elements.
                unsafe { Self::make_load(lanes.as_ptr()) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [i32; $width] {
                let mut lanes = [0; $width];
                // SAFETY: the array holds exactly WIDTH writable elements.
                unsafe { self.store(lanes.as_mut_ptr()) };
                lanes
            }
        }

        impl SimdVector for $name {
            type Element = i32;

            const WIDTH: usize = $width;

            #[inline(always)]
            fn make_repeating_element(value: i32) -> Self {
                Self::from_array([value; $width])
            }

            #[inline(always)]
            unsafe fn make_load(ptr: *const i32) -> Self {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                let elements = if $width == 4 {
                    vld1q_s32(ptr)
                } else {
                    let third = vset_lane_s32::<0>(ptr.add(2).read_unaligned(), vdup_n_s32(0));
                    vcombine_s32(vld1_s32(ptr), third)
                };

                Self { elements }
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut i32) {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                if $width == 4 {
                    vst1q_s32(ptr, self.elements);
                } else {
                    vst1_s32(ptr, vget_low_s32(self.elements));
                    ptr.add(2).write_unaligned(vgetq_lane_s32::<2>(self.elements));
                }
            }

            #[inline(always)]
            #[track_caller]
            fn get_element(self, index: usize) -> i32 {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                unsafe { get_lane!(vgetq_lane_s32, self.elements, index, [0, 1, 2, 3]) }
            }

            #[inline(always)]
            #[track_caller]
            fn set_element(&mut self, index: usize, value: i32) {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                self.elements =
                    unsafe { set_lane!(vsetq_lane_s32, value, self.elements, index, [0, 1, 2, 3]) };
            }
        }

        impl SimdArithmetic for $name {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vaddq_s32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vsubq_s32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vmulq_s32(self.elements, rhs.elements) },
                }
            }
        }

        impl SimdSigned for $name {
            #[inline(always)]
            fn negate(self) -> Self {
                Self {
                    elements: unsafe { vnegq_s32(self.elements) },
                }
            }

            #[inline(always)]
            fn absolute(self) -> Self {
                Self {
                    elements: unsafe { vabsq_s32(self.elements) },
                }
            }
        }

        impl SimdMinMax for $name {
            #[inline(always)]
            fn minimum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vminq_s32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn maximum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vmaxq_s32(self.elements, rhs.elements) },
                }
            }
        }

        impl_vector_common!($name, i32, $width);
        impl_arithmetic_ops!($name);
        impl_signed_ops!($name);
    };
}

impl_int32_q_vector!(
    /// Three `i32` lanes; lane 3 of the register is padding.
    Int32x3,
    3,
    [e0, e1, e2]
);

impl_int32_q_vector!(
    /// Four `i32` lanes filling the register.
    Int32x4,
    4,
    [e0, e1, e2, e3]
);
