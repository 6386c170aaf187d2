//! `u32` vectors in an `__m128i` register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::{
    element::BitElement,
    simd::{
        ops::{impl_arithmetic_ops, impl_bitwise_ops},
        traits::{SimdArithmetic, SimdBitwise, SimdMinMax, SimdShift, SimdVector},
    },
};

use super::{from_u32_lanes, keep_mask_epi32, mullo_epi32, select_si128, to_u32_lanes, LANE_COUNT};

impl_epi32_vector!(
    /// Two `u32` lanes; lanes 2 and 3 of the register are padding.
    UInt32x2,
    u32,
    2,
    [e0, e1]
);

impl_epi32_vector!(
    /// Three `u32` lanes; lane 3 of the register is padding.
    UInt32x3,
    u32,
    3,
    [e0, e1, e2]
);

impl_epi32_vector!(
    /// Four `u32` lanes filling the register.
    UInt32x4,
    u32,
    4,
    [e0, e1, e2, e3]
);

/// SSE2 only compares signed lanes; flipping the top bit maps unsigned order onto signed order.
#[inline(always)]
unsafe fn unsigned_greater(a: __m128i, b: __m128i) -> __m128i {
    let bias = _mm_set1_epi32(i32::MIN);
    _mm_cmpgt_epi32(_mm_xor_si128(a, bias), _mm_xor_si128(b, bias))
}

/// Per-lane variable shift. SSE2 only shifts all lanes by one count, so this goes through memory.
#[inline(always)]
unsafe fn shift_lanes(a: __m128i, b: __m128i, shift: fn(u32, u32) -> u32) -> __m128i {
    let values = to_u32_lanes(a);
    let amounts = to_u32_lanes(b);
    let mut shifted = [0u32; LANE_COUNT];
    for i in 0..LANE_COUNT {
        shifted[i] = shift(values[i], amounts[i]);
    }
    from_u32_lanes(shifted)
}

macro_rules! impl_uint32_ops {
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

        impl SimdMinMax for $name {
            #[inline(always)]
            fn minimum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe {
                        let greater = unsigned_greater(self.elements, rhs.elements);
                        select_si128(greater, rhs.elements, self.elements)
                    },
                }
            }

            #[inline(always)]
            fn maximum(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe {
                        let greater = unsigned_greater(self.elements, rhs.elements);
                        select_si128(greater, self.elements, rhs.elements)
                    },
                }
            }
        }

        impl SimdBitwise for $name {
            /// Complements the logical lanes only; padding stays zero.
            #[inline(always)]
            fn bitwise_not(self) -> Self {
                Self {
                    elements: unsafe { _mm_xor_si128(self.elements, keep_mask_epi32(Self::WIDTH)) },
                }
            }

            #[inline(always)]
            fn bitwise_and(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_and_si128(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn bitwise_or(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_or_si128(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn bitwise_exclusive_or(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_xor_si128(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn bitwise_and_not(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_andnot_si128(self.elements, rhs.elements) },
                }
            }
        }

        impl SimdShift for $name {
            #[inline(always)]
            fn shift_left_element_wise(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { shift_lanes(self.elements, rhs.elements, u32::lane_shl) },
                }
            }

            #[inline(always)]
            fn shift_right_element_wise(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { shift_lanes(self.elements, rhs.elements, u32::lane_shr) },
                }
            }

            #[inline(always)]
            fn shift_left(self, amount: u32) -> Self {
                Self {
                    elements: unsafe {
                        _mm_sll_epi32(self.elements, _mm_cvtsi32_si128(amount as i32))
                    },
                }
            }

            #[inline(always)]
            fn shift_right(self, amount: u32) -> Self {
                Self {
                    elements: unsafe {
                        _mm_srl_epi32(self.elements, _mm_cvtsi32_si128(amount as i32))
                    },
                }
            }
        }

        impl_arithmetic_ops!($name);
        impl_bitwise_ops!($name, u32);
    };
}

impl_uint32_ops!(UInt32x2);
impl_uint32_ops!(UInt32x3);
impl_uint32_ops!(UInt32x4);
