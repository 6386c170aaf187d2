//! `f32` vectors in an `__m128` register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::{
    error::lane_index_panic,
    simd::{
        ops::{impl_arithmetic_ops, impl_divide_ops, impl_signed_ops, impl_vector_common},
        traits::{SimdArithmetic, SimdDivide, SimdMinMax, SimdSigned, SimdVector},
    },
};

use super::{
    extract_epi32, insert_epi32, keep_mask_ps, load_epi32, max_num_ps, min_num_ps, select_ps,
    store_epi32,
};

macro_rules! impl_float32_vector {
    ($(#[$doc:meta])* $name:ident, $width:literal, [$($lane:ident),+]) => {
        $(#[$doc])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name {
            elements: __m128,
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
        }

        impl SimdVector for $name {
            type Element = f32;

            const WIDTH: usize = $width;

            #[inline(always)]
            fn make_repeating_element(value: f32) -> Self {
                Self::from_array([value; $width])
            }

            #[inline(always)]
            fn make_zero() -> Self {
                Self {
                    elements: unsafe { _mm_setzero_ps() },
                }
            }

            #[inline(always)]
            unsafe fn make_load(ptr: *const f32) -> Self {
                Self {
                    elements: _mm_castsi128_ps(load_epi32(ptr, Self::WIDTH)),
                }
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut f32) {
                store_epi32(_mm_castps_si128(self.elements), ptr, Self::WIDTH)
            }

            #[inline(always)]
            #[track_caller]
            fn get_element(self, index: usize) -> f32 {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                let bits = unsafe { extract_epi32(_mm_castps_si128(self.elements), index) };
                f32::from_bits(bits as u32)
            }

            #[inline(always)]
            #[track_caller]
            fn set_element(&mut self, index: usize, value: f32) {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                self.elements = unsafe {
                    let bits = _mm_castps_si128(self.elements);
                    _mm_castsi128_ps(insert_epi32(bits, index, value.to_bits() as i32))
                };
            }
        }

        impl SimdArithmetic for $name {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
                }
            }
        }

        impl SimdSigned for $name {
            /// Flips the sign bit of the logical lanes only, so padding stays `+0.0`.
            #[inline(always)]
            fn negate(self) -> Self {
                Self {
                    elements: unsafe {
                        let sign = _mm_and_ps(_mm_set1_ps(-0.0), keep_mask_ps(Self::WIDTH));
                        _mm_xor_ps(self.elements, sign)
                    },
                }
            }

            #[inline(always)]
            fn absolute(self) -> Self {
                Self {
                    elements: unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.elements) },
                }
            }
        }

        impl SimdDivide for $name {
            /// Padding lanes of the divisor are replaced by `1.0`, giving `0.0 / 1.0`
            /// there instead of `0.0 / 0.0`.
            #[inline(always)]
            fn divide(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe {
                        let divisor =
                            select_ps(keep_mask_ps(Self::WIDTH), rhs.elements, _mm_set1_ps(1.0));
                        _mm_div_ps(self.elements, divisor)
                    },
                }
            }
        }

        impl SimdMinMax for $name {
            #[inline(always)]
            fn minimum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { min_num_ps(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn maximum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { max_num_ps(self.elements, rhs.elements) },
                }
            }
        }

        impl_vector_common!($name, f32, $width);
        impl_arithmetic_ops!($name);
        impl_signed_ops!($name);
        impl_divide_ops!($name);
    };
}

impl_float32_vector!(
    /// Two `f32` lanes; lanes 2 and 3 of the register are padding.
    Float32x2,
    2,
    [e0, e1]
);

impl_float32_vector!(
    /// Three `f32` lanes; lane 3 of the register is padding.
    Float32x3,
    3,
    [e0, e1, e2]
);

impl_float32_vector!(
    /// Four `f32` lanes filling the register.
    Float32x4,
    4,
    [e0, e1, e2, e3]
);

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_lanes(v: __m128) -> [f32; 4] {
        let mut lanes = [0.0f32; 4];
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), v) };
        lanes
    }

    fn raw_bits(v: __m128) -> [u32; 4] {
        raw_lanes(v).map(f32::to_bits)
    }

    mod padding_tests {
        use super::*;

        #[test]
        fn test_construction_zeroes_padding() {
            assert_eq!(
                raw_lanes(Float32x2::make(1.0, 2.0).elements),
                [1.0, 2.0, 0.0, 0.0]
            );
            assert_eq!(
                raw_lanes(Float32x3::make_repeating_element(7.5).elements),
                [7.5, 7.5, 7.5, 0.0]
            );

            let data = [1.0f32, 2.0, 3.0];
            let v = Float32x3::from_slice(&data).unwrap();
            assert_eq!(raw_lanes(v.elements), [1.0, 2.0, 3.0, 0.0]);
        }

        #[test]
        fn test_negate_keeps_positive_zero_padding() {
            let v = Float32x3::make(1.0, -2.0, 0.0).negate();
            assert_eq!(v.to_array(), [-1.0, 2.0, -0.0]);
            assert_eq!(raw_bits(v.elements)[3], 0);

            let v = Float32x2::make(3.0, 4.0).negate();
            assert_eq!(raw_bits(v.elements)[2..], [0, 0]);
        }

        #[test]
        fn test_divide_leaves_zero_padding() {
            let v = Float32x3::make(1.0, 2.0, 3.0) / Float32x3::make(2.0, 0.0, 4.0);
            let raw = raw_lanes(v.elements);
            assert_eq!(raw[0], 0.5);
            assert_eq!(raw[1], f32::INFINITY);
            assert_eq!(raw[2], 0.75);
            assert_eq!(raw[3].to_bits(), 0);
        }

        #[test]
        fn test_set_element_leaves_padding() {
            let mut v = Float32x2::make(1.0, 2.0);
            v.set_element(1, -9.0);
            assert_eq!(raw_lanes(v.elements), [1.0, -9.0, 0.0, 0.0]);
        }
    }

    mod operation_tests {
        use super::*;

        #[test]
        fn test_get_element_each_lane() {
            let v = Float32x4::make(1.0, 2.0, 3.0, 4.0);
            for (i, expected) in [1.0, 2.0, 3.0, 4.0].into_iter().enumerate() {
                assert_eq!(v.get_element(i), expected);
            }
        }

        #[test]
        #[should_panic(expected = "Lane index out of range: 2 (vector has 2 lanes)")]
        fn test_get_element_out_of_range_panics() {
            let _ = Float32x2::make(1.0, 2.0).get_element(2);
        }

        #[test]
        fn test_store_writes_exactly_width() {
            let mut out = [-1.0f32; 4];
            unsafe { Float32x3::make(1.0, 2.0, 3.0).store(out.as_mut_ptr()) };
            assert_eq!(out, [1.0, 2.0, 3.0, -1.0]);
        }

        #[test]
        fn test_absolute_clears_sign() {
            let v = Float32x4::make(-0.0, -1.5, 2.0, f32::NEG_INFINITY).absolute();
            assert_eq!(v.to_array(), [0.0, 1.5, 2.0, f32::INFINITY]);
            assert_eq!(v.get_element(0).to_bits(), 0);
        }

        #[test]
        fn test_min_max_num() {
            let a = Float32x4::make(f32::NAN, 1.0, -3.0, 8.0);
            let b = Float32x4::make(2.0, f32::NAN, -4.0, 9.0);

            assert_eq!(a.minimum(b).to_array(), [2.0, 1.0, -4.0, 8.0]);
            assert_eq!(a.maximum(b).to_array(), [2.0, 1.0, -3.0, 9.0]);
        }

        #[test]
        fn test_operators_and_debug() {
            let mut v = Float32x2::make(1.0, 2.0);
            v += Float32x2::make(1.0, 1.0);
            v *= Float32x2::make_repeating_element(2.0);
            assert_eq!(v, Float32x2::make(4.0, 6.0));
            assert_eq!(format!("{v:?}"), "Float32x2([4.0, 6.0])");
        }
    }
}
