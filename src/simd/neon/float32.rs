//! `f32` vectors in NEON registers.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::{
    error::lane_index_panic,
    simd::{
        ops::{impl_arithmetic_ops, impl_divide_ops, impl_signed_ops, impl_vector_common},
        traits::{SimdArithmetic, SimdDivide, SimdMinMax, SimdSigned, SimdVector},
    },
};

/// Two `f32` lanes in a 64-bit register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Float32x2 {
    elements: float32x2_t,
}

impl Float32x2 {
    #[inline(always)]
    pub fn make(e0: f32, e1: f32) -> Self {
        Self::from_array([e0, e1])
    }

    /// Builds a vector from its lanes, least significant first.
    #[inline(always)]
    pub fn from_array(lanes: [f32; 2]) -> Self {
        // SAFETY: the array holds exactly two readable elements.
        unsafe { Self::make_load(lanes.as_ptr()) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 2] {
        let mut lanes = [0.0; 2];
        // SAFETY: the array holds exactly two writable elements.
        unsafe { self.store(lanes.as_mut_ptr()) };
        lanes
    }
}

impl SimdVector for Float32x2 {
    type Element = f32;

    const WIDTH: usize = 2;

    #[inline(always)]
    fn make_repeating_element(value: f32) -> Self {
        Self {
            elements: unsafe { vdup_n_f32(value) },
        }
    }

    #[inline(always)]
    unsafe fn make_load(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: vld1_f32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        vst1_f32(ptr, self.elements)
    }

    #[inline(always)]
    #[track_caller]
    fn get_element(self, index: usize) -> f32 {
        if index >= Self::WIDTH {
            lane_index_panic(index, Self::WIDTH);
        }

        unsafe { get_lane!(vget_lane_f32, self.elements, index, [0, 1]) }
    }

    #[inline(always)]
    #[track_caller]
    fn set_element(&mut self, index: usize, value: f32) {
        if index >= Self::WIDTH {
            lane_index_panic(index, Self::WIDTH);
        }

        self.elements = unsafe { set_lane!(vset_lane_f32, value, self.elements, index, [0, 1]) };
    }
}

impl SimdArithmetic for Float32x2 {
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vadd_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vsub_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmul_f32(self.elements, rhs.elements) },
        }
    }
}

impl SimdSigned for Float32x2 {
    #[inline(always)]
    fn negate(self) -> Self {
        Self {
            elements: unsafe { vneg_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn absolute(self) -> Self {
        Self {
            elements: unsafe { vabs_f32(self.elements) },
        }
    }
}

impl SimdDivide for Float32x2 {
    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vdiv_f32(self.elements, rhs.elements) },
        }
    }
}

impl SimdMinMax for Float32x2 {
    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vminnm_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmaxnm_f32(self.elements, rhs.elements) },
        }
    }
}

impl_vector_common!(Float32x2, f32, 2);
impl_arithmetic_ops!(Float32x2);
impl_signed_ops!(Float32x2);
impl_divide_ops!(Float32x2);

/// 3- and 4-lane vectors in a `float32x4_t`. For `WIDTH == 3` lane 3 is padding.
macro_rules! impl_float32_q_vector {
    ($(#[$doc:meta])* $name:ident, $width:literal, [$($lane:ident),+]) => {
        $(#[$doc])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name {
            elements: float32x4_t,
        }

        impl $name {
            #[inline(always)]
            pub fn make($($lane: f32),+) -> Self {
                Self::from_array([$($lane),+])
            }

            /// Builds a vector from its lanes, least significant first.
            #[inline(always)]
            pub fn from_array(lanes: [f32; $width]) -> Self {
                // SAFETY: the array holds exactly WIDTH readable elements.
                unsafe { Self::make_load(lanes.as_ptr()) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [f32; $width] {
                let mut lanes = [0.0; $width];
                // SAFETY: the array holds exactly WIDTH writable elements.
                unsafe { self.store(lanes.as_mut_ptr()) };
                lanes
            }

            /// Forces the padding lane back to `value`; a no-op for full-width vectors.
            #[inline(always)]
            unsafe fn with_padding(elements: float32x4_t, value: f32) -> float32x4_t {
                if $width == 3 {
                    vsetq_lane_f32::<3>(value, elements)
                } else {
                    elements
                }
            }
        }

        impl SimdVector for $name {
            type Element = f32;

            const WIDTH: usize = $width;

            #[inline(always)]
            fn make_repeating_element(value: f32) -> Self {
                Self {
                    elements: unsafe { Self::with_padding(vdupq_n_f32(value), 0.0) },
                }
            }

            #[inline(always)]
            unsafe fn make_load(ptr: *const f32) -> Self {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                let elements = if $width == 4 {
                    vld1q_f32(ptr)
                } else {
                    let third = vset_lane_f32::<0>(ptr.add(2).read_unaligned(), vdup_n_f32(0.0));
                    vcombine_f32(vld1_f32(ptr), third)
                };

                Self { elements }
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut f32) {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                if $width == 4 {
                    vst1q_f32(ptr, self.elements);
                } else {
                    vst1_f32(ptr, vget_low_f32(self.elements));
                    ptr.add(2).write_unaligned(vgetq_lane_f32::<2>(self.elements));
                }
            }

            #[inline(always)]
            #[track_caller]
            fn get_element(self, index: usize) -> f32 {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                unsafe { get_lane!(vgetq_lane_f32, self.elements, index, [0, 1, 2, 3]) }
            }

            #[inline(always)]
            #[track_caller]
            fn set_element(&mut self, index: usize, value: f32) {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                self.elements =
                    unsafe { set_lane!(vsetq_lane_f32, value, self.elements, index, [0, 1, 2, 3]) };
            }
        }

        impl SimdArithmetic for $name {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
                }
            }
        }

        impl SimdSigned for $name {
            /// `vnegq` would turn a `+0.0` padding lane into `-0.0`, so it is reset.
            #[inline(always)]
            fn negate(self) -> Self {
                Self {
                    elements: unsafe { Self::with_padding(vnegq_f32(self.elements), 0.0) },
                }
            }

            #[inline(always)]
            fn absolute(self) -> Self {
                Self {
                    elements: unsafe { vabsq_f32(self.elements) },
                }
            }
        }

        impl SimdDivide for $name {
            /// Divides by `1.0` in the padding lane instead of `0.0`.
            #[inline(always)]
            fn divide(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe {
                        vdivq_f32(self.elements, Self::with_padding(rhs.elements, 1.0))
                    },
                }
            }
        }

        impl SimdMinMax for $name {
            #[inline(always)]
            fn minimum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vminnmq_f32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn maximum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vmaxnmq_f32(self.elements, rhs.elements) },
                }
            }
        }

        impl_vector_common!($name, f32, $width);
        impl_arithmetic_ops!($name);
        impl_signed_ops!($name);
        impl_divide_ops!($name);
    };
}

impl_float32_q_vector!(
    /// Three `f32` lanes; lane 3 of the register is padding.
    Float32x3,
    3,
    [e0, e1, e2]
);

impl_float32_q_vector!(
    /// Four `f32` lanes filling the register.
    Float32x4,
    4,
    [e0, e1, e2, e3]
);

#[cfg(test)]
mod tests {
    use super::*;

    fn padding_bits(v: Float32x3) -> u32 {
        unsafe { vgetq_lane_f32::<3>(v.elements) }.to_bits()
    }

    mod padding_tests {
        use super::*;

        #[test]
        fn test_construction_zeroes_padding() {
            assert_eq!(padding_bits(Float32x3::make(1.0, 2.0, 3.0)), 0);
            assert_eq!(padding_bits(Float32x3::make_repeating_element(-4.0)), 0);
            let loaded = Float32x3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
            assert_eq!(padding_bits(loaded), 0);
        }

        #[test]
        fn test_negate_keeps_positive_zero_padding() {
            let v = Float32x3::make(1.0, -2.0, 3.0).negate();
            assert_eq!(v.to_array(), [-1.0, 2.0, -3.0]);
            assert_eq!(padding_bits(v), 0);
        }

        #[test]
        fn test_divide_by_zero_lane() {
            let v = Float32x3::make(1.0, 2.0, 3.0) / Float32x3::make(2.0, 0.0, 4.0);
            assert_eq!(v.to_array(), [0.5, f32::INFINITY, 0.75]);
            assert_eq!(padding_bits(v), 0);
        }
    }

    mod operation_tests {
        use super::*;

        #[test]
        fn test_two_lane_round_trip() {
            let mut v = Float32x2::make(1.5, -2.5);
            assert_eq!(v.get_element(1), -2.5);
            v.set_element(0, 8.0);
            assert_eq!(v.to_array(), [8.0, -2.5]);
        }

        #[test]
        fn test_store_writes_exactly_width() {
            let mut out = [-1.0f32; 4];
            unsafe { Float32x3::make(1.0, 2.0, 3.0).store(out.as_mut_ptr()) };
            assert_eq!(out, [1.0, 2.0, 3.0, -1.0]);
        }

        #[test]
        fn test_min_max_num() {
            let a = Float32x4::make(f32::NAN, 1.0, -3.0, 8.0);
            let b = Float32x4::make(2.0, f32::NAN, -4.0, 9.0);
            assert_eq!(a.minimum(b).to_array(), [2.0, 1.0, -4.0, 8.0]);
            assert_eq!(a.maximum(b).to_array(), [2.0, 1.0, -3.0, 9.0]);
        }

        #[test]
        #[should_panic(expected = "Lane index out of range: 4 (vector has 4 lanes)")]
        fn test_set_element_out_of_range_panics() {
            let mut v = Float32x4::make_zero();
            v.set_element(4, 1.0);
        }
    }
}
