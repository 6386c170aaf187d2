//! `u32` vectors in NEON registers.
//!
//! NEON shifts by a signed per-lane register amount; a negative amount shifts right.
//! Both element-wise shifts map onto `vshl` with the amounts reinterpreted as `i32`.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::{
    error::lane_index_panic,
    simd::{
        ops::{impl_arithmetic_ops, impl_bitwise_ops, impl_vector_common},
        traits::{SimdArithmetic, SimdBitwise, SimdMinMax, SimdShift, SimdVector},
    },
};

/// Two `u32` lanes in a 64-bit register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct UInt32x2 {
    elements: uint32x2_t,
}

impl UInt32x2 {
    #[inline(always)]
    pub fn make(e0: u32, e1: u32) -> Self {
        Self::from_array([e0, e1])
    }

    /// Builds a vector from its lanes, least significant first.
    #[inline(always)]
    pub fn from_array(lanes: [u32; 2]) -> Self {
        // SAFETY: the array holds exactly two readable elements.
        unsafe { Self::make_load(lanes.as_ptr()) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [u32; 2] {
        let mut lanes = [0; 2];
        // SAFETY: the array holds exactly two writable elements.
        unsafe { self.store(lanes.as_mut_ptr()) };
        lanes
    }
}

impl SimdVector for UInt32x2 {
    type Element = u32;

    const WIDTH: usize = 2;

    #[inline(always)]
    fn make_repeating_element(value: u32) -> Self {
        Self {
            elements: unsafe { vdup_n_u32(value) },
        }
    }

    #[inline(always)]
    unsafe fn make_load(ptr: *const u32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: vld1_u32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut u32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        vst1_u32(ptr, self.elements)
    }

    #[inline(always)]
    #[track_caller]
    fn get_element(self, index: usize) -> u32 {
        if index >= Self::WIDTH {
            lane_index_panic(index, Self::WIDTH);
        }

        unsafe { get_lane!(vget_lane_u32, self.elements, index, [0, 1]) }
    }

    #[inline(always)]
    #[track_caller]
    fn set_element(&mut self, index: usize, value: u32) {
        if index >= Self::WIDTH {
            lane_index_panic(index, Self::WIDTH);
        }

        self.elements = unsafe { set_lane!(vset_lane_u32, value, self.elements, index, [0, 1]) };
    }
}

impl SimdArithmetic for UInt32x2 {
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vadd_u32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vsub_u32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmul_u32(self.elements, rhs.elements) },
        }
    }
}

impl SimdMinMax for UInt32x2 {
    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmin_u32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmax_u32(self.elements, rhs.elements) },
        }
    }
}

impl SimdBitwise for UInt32x2 {
    #[inline(always)]
    fn bitwise_not(self) -> Self {
        Self {
            elements: unsafe { vmvn_u32(self.elements) },
        }
    }

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vand_u32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vorr_u32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitwise_exclusive_or(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { veor_u32(self.elements, rhs.elements) },
        }
    }

    /// `vbic(a, b)` computes `a & !b`, hence the swapped operands.
    #[inline(always)]
    fn bitwise_and_not(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vbic_u32(rhs.elements, self.elements) },
        }
    }
}

impl SimdShift for UInt32x2 {
    #[inline(always)]
    fn shift_left_element_wise(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vshl_u32(self.elements, vreinterpret_s32_u32(rhs.elements)) },
        }
    }

    #[inline(always)]
    fn shift_right_element_wise(self, rhs: Self) -> Self {
        Self {
            elements: unsafe {
                let amounts = vneg_s32(vreinterpret_s32_u32(rhs.elements));
                vshl_u32(self.elements, amounts)
            },
        }
    }
}

impl_vector_common!(UInt32x2, u32, 2);
impl_arithmetic_ops!(UInt32x2);
impl_bitwise_ops!(UInt32x2, u32);

macro_rules! impl_uint32_q_vector {
    ($(#[$doc:meta])* $name:ident, $width:literal, [$($lane:ident),+]) => {
        $(#[$doc])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name {
            elements: uint32x4_t,
        }

        impl $name {
            #[inline(always)]
            pub fn make($($lane: u32),+) -> Self {
                Self::from_array([$($lane),+])
            }

            /// Builds a vector from its lanes, least significant first.
            #[inline(always)]
            pub fn from_array(lanes: [u32; $width]) -> Self {
                // SAFETY: the array holds exactly WIDTH readable elements.
                unsafe { Self::make_load(lanes.as_ptr()) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [u32; $width] {
                let mut lanes = [0; $width];
                // SAFETY: the array holds exactly WIDTH writable elements.
                unsafe { self.store(lanes.as_mut_ptr()) };
                lanes
            }
        }

        impl SimdVector for $name {
            type Element = u32;

            const WIDTH: usize = $width;

            #[inline(always)]
            fn make_repeating_element(value: u32) -> Self {
                Self::from_array([value; $width])
            }

            #[inline(always)]
            unsafe fn make_load(ptr: *const u32) -> Self {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                let elements = if $width == 4 {
                    vld1q_u32(ptr)
                } else {
                    let third = vset_lane_u32::<0>(ptr.add(2).read_unaligned(), vdup_n_u32(0));
                    vcombine_u32(vld1_u32(ptr), third)
                };

                Self { elements }
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut u32) {
                debug_assert!(!ptr.is_null(), "Pointer must not be null");

                if $width == 4 {
                    vst1q_u32(ptr, self.elements);
                } else {
                    vst1_u32(ptr, vget_low_u32(self.elements));
                    ptr.add(2).write_unaligned(vgetq_lane_u32::<2>(self.elements));
                }
            }

            #[inline(always)]
            #[track_caller]
            fn get_element(self, index: usize) -> u32 {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                unsafe { get_lane!(vgetq_lane_u32, self.elements, index, [0, 1, 2, 3]) }
            }

            #[inline(always)]
            #[track_caller]
            fn set_element(&mut self, index: usize, value: u32) {
                if index >= Self::WIDTH {
                    lane_index_panic(index, Self::WIDTH);
                }

                self.elements =
                    unsafe { set_lane!(vsetq_lane_u32, value, self.elements, index, [0, 1, 2, 3]) };
            }
        }

        impl SimdArithmetic for $name {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vaddq_u32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vsubq_u32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vmulq_u32(self.elements, rhs.elements) },
                }
            }
        }

        impl SimdMinMax for $name {
            #[inline(always)]
            fn minimum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vminq_u32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn maximum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vmaxq_u32(self.elements, rhs.elements) },
                }
            }
        }

        impl SimdBitwise for $name {
            /// Complements every register lane, then clears the padding lane again.
            #[inline(always)]
            fn bitwise_not(self) -> Self {
                Self {
                    elements: unsafe {
                        let inverted = vmvnq_u32(self.elements);
                        if $width == 3 {
                            vsetq_lane_u32::<3>(0, inverted)
                        } else {
                            inverted
                        }
                    },
                }
            }

            #[inline(always)]
            fn bitwise_and(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vandq_u32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn bitwise_or(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vorrq_u32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn bitwise_exclusive_or(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { veorq_u32(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn bitwise_and_not(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { vbicq_u32(rhs.elements, self.elements) },
                }
            }
        }

        impl SimdShift for $name {
            #[inline(always)]
            fn shift_left_element_wise(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe {
                        vshlq_u32(self.elements, vreinterpretq_s32_u32(rhs.elements))
                    },
                }
            }

            #[inline(always)]
            fn shift_right_element_wise(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe {
                        let amounts = vnegq_s32(vreinterpretq_s32_u32(rhs.elements));
                        vshlq_u32(self.elements, amounts)
                    },
                }
            }
        }

        impl_vector_common!($name, u32, $width);
        impl_arithmetic_ops!($name);
        impl_bitwise_ops!($name, u32);
    };
}

impl_uint32_q_vector!(
    /// Three `u32` lanes; lane 3 of the register is padding.
    UInt32x3,
    3,
    [e0, e1, e2]
);

impl_uint32_q_vector!(
    /// Four `u32` lanes filling the register.
    UInt32x4,
    4,
    [e0, e1, e2, e3]
);

#[cfg(test)]
mod tests {
    use super::*;

    fn padding(v: UInt32x3) -> u32 {
        unsafe { vgetq_lane_u32::<3>(v.elements) }
    }

    #[test]
    fn test_not_keeps_padding_zero() {
        let v = !UInt32x3::make(0, 1, 2);
        assert_eq!(v.to_array(), [u32::MAX, u32::MAX - 1, u32::MAX - 2]);
        assert_eq!(padding(v), 0);
    }

    #[test]
    fn test_and_not_operand_order() {
        let a = UInt32x2::make(0b1100, u32::MAX);
        let b = UInt32x2::make(0b1010, 0xFF);
        assert_eq!(a.bitwise_and_not(b).to_array(), [0b0010, 0]);

        let a = UInt32x4::make(0b1100, 0, u32::MAX, 1);
        let b = UInt32x4::make(0b1010, 7, 7, 3);
        assert_eq!(a.bitwise_and_not(b).to_array(), [0b0010, 7, 0, 2]);
    }

    #[test]
    fn test_element_wise_shifts() {
        let v = UInt32x3::make(1, 0x8000_0000, 0xF0);
        let amounts = UInt32x3::make(31, 31, 4);
        assert_eq!((v << amounts).to_array(), [0x8000_0000, 0, 0xF00]);
        assert_eq!((v >> amounts).to_array(), [0, 1, 0xF]);
        assert_eq!(padding(v << amounts), 0);

        let v = UInt32x2::make(6, 3);
        assert_eq!(v.shift_right(1).to_array(), [3, 1]);
        assert_eq!(v.shift_left(2).to_array(), [24, 12]);
    }

    #[test]
    fn test_unsigned_min_max() {
        let a = UInt32x4::make(0, u32::MAX, 0x8000_0000, 5);
        let b = UInt32x4::make(1, 1, 0x7FFF_FFFF, 5);
        assert_eq!(a.minimum(b).to_array(), [0, 1, 0x7FFF_FFFF, 5]);
        assert_eq!(a.maximum(b).to_array(), [1, u32::MAX, 0x8000_0000, 5]);
    }
}
