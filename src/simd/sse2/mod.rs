//! x86 / x86_64 SSE2 backend.
//!
//! Every vector lives in one 128-bit XMM register. Widths that do not fill the
//! register leave padding lanes above the logical ones:
//!
//! | Type | Register | Logical lanes | Padding lanes |
//! |---|---|---|---|
//! | `Float32x2` / `Int32x2` / `UInt32x2` | `__m128` / `__m128i` | 2 | 2 |
//! | `Float32x3` / `Int32x3` / `UInt32x3` | `__m128` / `__m128i` | 3 | 1 |
//! | `Float32x4` / `Int32x4` / `UInt32x4` | `__m128` / `__m128i` | 4 | 0 |
//! | `Int64x2` / `UInt64x2` | `__m128i` | 2 | 0 |
//!
//! Padding lanes are zeroed at construction and kept at zero by every operation.
//! Loads and stores touch only the logical lanes, so a 3-lane load never reads a
//! fourth element from memory.
//!
//! SSE2 lacks several instructions the other backends use natively (32-bit
//! multiply, signed/unsigned 32-bit min/max, absolute value, per-lane variable
//! shifts, 64-bit multiply). Those are built from SSE2 compare/blend sequences
//! where possible and fall back to per-lane scalar code otherwise.
//!
//! # Conditional Compilation
//!
//! This module is only compiled when the build script selects the `sse2` backend.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Declares a 32-bit integer vector in an `__m128i` with its construction and lane
/// access. Padding lanes come out of [`load_epi32`] zeroed.
macro_rules! impl_epi32_vector {
    ($(#[$doc:meta])* $name:ident, $elem:ty, $width:literal, [$($lane:ident),+]) => {
        $(#[$doc])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name {
            elements: __m128i,
        }

        impl $name {
            #[inline(always)]
            pub fn make($($lane: $elem),+) -> Self {
                Self::from_array([$($lane),+])
            }

            /// Builds a vector from its lanes, least significant first.
            #[inline(always)]
            pub fn from_array(lanes: [$elem; $width]) -> Self {
                // SAFETY: the array holds exactly WIDTH readable elements.
                unsafe { <Self as SimdVector>::make_load(lanes.as_ptr()) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [$elem; $width] {
                let mut lanes = [0; $width];
                // SAFETY: the array holds exactly WIDTH writable elements.
                unsafe { <Self as SimdVector>::store(self, lanes.as_mut_ptr()) };
                lanes
            }
        }

        impl SimdVector for $name {
            type Element = $elem;

            const WIDTH: usize = $width;

            #[inline(always)]
            fn make_repeating_element(value: $elem) -> Self {
                Self::from_array([value; $width])
            }

            #[inline(always)]
            fn make_zero() -> Self {
                Self {
                    elements: unsafe { _mm_setzero_si128() },
                }
            }

            #[inline(always)]
            unsafe fn make_load(ptr: *const $elem) -> Self {
                Self {
                    elements: $crate::simd::sse2::load_epi32(ptr, Self::WIDTH),
                }
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut $elem) {
                $crate::simd::sse2::store_epi32(self.elements, ptr, Self::WIDTH)
            }

            #[inline(always)]
            #[track_caller]
            fn get_element(self, index: usize) -> $elem {
                if index >= Self::WIDTH {
                    $crate::error::lane_index_panic(index, Self::WIDTH);
                }

                unsafe { $crate::simd::sse2::extract_epi32(self.elements, index) as $elem }
            }

            #[inline(always)]
            #[track_caller]
            fn set_element(&mut self, index: usize, value: $elem) {
                if index >= Self::WIDTH {
                    $crate::error::lane_index_panic(index, Self::WIDTH);
                }

                self.elements =
                    unsafe { $crate::simd::sse2::insert_epi32(self.elements, index, value as i32) };
            }
        }

        $crate::simd::ops::impl_vector_common!($name, $elem, $width);
    };
}

pub mod float32;

pub mod int32;

pub mod int64;

pub mod uint32;

pub use float32::{Float32x2, Float32x3, Float32x4};
pub use int32::{Int32x2, Int32x3, Int32x4};
pub use int64::{Int64x2, UInt64x2};
pub use uint32::{UInt32x2, UInt32x3, UInt32x4};

/// Number of 32-bit lanes in an XMM register.
pub(crate) const LANE_COUNT: usize = 4;

/// All bits set in the first `width` 32-bit lanes, clear in the padding lanes.
#[inline(always)]
pub(crate) unsafe fn keep_mask_epi32(width: usize) -> __m128i {
    match width {
        2 => _mm_setr_epi32(-1, -1, 0, 0),
        3 => _mm_setr_epi32(-1, -1, -1, 0),
        _ => _mm_set1_epi32(-1),
    }
}

#[inline(always)]
pub(crate) unsafe fn keep_mask_ps(width: usize) -> __m128 {
    _mm_castsi128_ps(keep_mask_epi32(width))
}

/// Loads `width` (2, 3 or 4) consecutive 32-bit elements, zeroing the rest.
///
/// Never reads past the last logical element: two lanes come from a 64-bit load,
/// the third from a scalar read.
#[inline(always)]
pub(crate) unsafe fn load_epi32<T>(ptr: *const T, width: usize) -> __m128i {
    debug_assert!(
        core::mem::size_of::<T>() == 4,
        "Element must be 32 bits wide"
    );
    debug_assert!(!ptr.is_null(), "Pointer must not be null");

    match width {
        2 => _mm_loadl_epi64(ptr as *const __m128i),
        3 => {
            let low = _mm_loadl_epi64(ptr as *const __m128i);
            let third = (ptr as *const i32).add(2).read_unaligned();
            _mm_unpacklo_epi64(low, _mm_cvtsi32_si128(third))
        }
        _ => _mm_loadu_si128(ptr as *const __m128i),
    }
}

/// Stores the first `width` (2, 3 or 4) 32-bit lanes of `v`; padding lanes are not written.
#[inline(always)]
pub(crate) unsafe fn store_epi32<T>(v: __m128i, ptr: *mut T, width: usize) {
    debug_assert!(
        core::mem::size_of::<T>() == 4,
        "Element must be 32 bits wide"
    );
    debug_assert!(!ptr.is_null(), "Pointer must not be null");

    match width {
        2 => _mm_storel_epi64(ptr as *mut __m128i, v),
        3 => {
            _mm_storel_epi64(ptr as *mut __m128i, v);
            let third = _mm_cvtsi128_si32(_mm_srli_si128::<8>(v));
            (ptr as *mut i32).add(2).write_unaligned(third);
        }
        _ => _mm_storeu_si128(ptr as *mut __m128i, v),
    }
}

/// Extracts 32-bit lane `index` (0..4) with a shuffle, without going through memory.
#[inline(always)]
pub(crate) unsafe fn extract_epi32(v: __m128i, index: usize) -> i32 {
    match index {
        0 => _mm_cvtsi128_si32(v),
        1 => _mm_cvtsi128_si32(_mm_shuffle_epi32::<0b01_01_01_01>(v)),
        2 => _mm_cvtsi128_si32(_mm_shuffle_epi32::<0b10_10_10_10>(v)),
        3 => _mm_cvtsi128_si32(_mm_shuffle_epi32::<0b11_11_11_11>(v)),
        _ => unreachable!("Index must be < {}", LANE_COUNT),
    }
}

/// Replaces 32-bit lane `index` (0..4). SSE2 has no 32-bit insert, so this goes through a spill.
#[inline(always)]
pub(crate) unsafe fn insert_epi32(v: __m128i, index: usize, value: i32) -> __m128i {
    let mut lanes = to_i32_lanes(v);
    lanes[index] = value;
    from_i32_lanes(lanes)
}

#[inline(always)]
pub(crate) unsafe fn to_i32_lanes(v: __m128i) -> [i32; LANE_COUNT] {
    let mut lanes = [0i32; LANE_COUNT];
    _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, v);
    lanes
}

#[inline(always)]
pub(crate) unsafe fn from_i32_lanes(lanes: [i32; LANE_COUNT]) -> __m128i {
    _mm_loadu_si128(lanes.as_ptr() as *const __m128i)
}

#[inline(always)]
pub(crate) unsafe fn to_u32_lanes(v: __m128i) -> [u32; LANE_COUNT] {
    let mut lanes = [0u32; LANE_COUNT];
    _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, v);
    lanes
}

#[inline(always)]
pub(crate) unsafe fn from_u32_lanes(lanes: [u32; LANE_COUNT]) -> __m128i {
    _mm_loadu_si128(lanes.as_ptr() as *const __m128i)
}

/// Low 32 bits of each 32x32 product (SSE4.1 `pmulld` emulated with two `pmuludq`).
///
/// The low half of a product is the same for signed and unsigned operands.
#[inline(always)]
pub(crate) unsafe fn mullo_epi32(a: __m128i, b: __m128i) -> __m128i {
    // lanes 0 and 2
    let even = _mm_mul_epu32(a, b);
    // lanes 1 and 3
    let odd = _mm_mul_epu32(_mm_srli_epi64::<32>(a), _mm_srli_epi64::<32>(b));

    let even_low = _mm_shuffle_epi32::<0b00_00_10_00>(even);
    let odd_low = _mm_shuffle_epi32::<0b00_00_10_00>(odd);
    _mm_unpacklo_epi32(even_low, odd_low)
}

/// Picks `on_true` where `mask` is all ones and `on_false` where it is all zeros.
#[inline(always)]
pub(crate) unsafe fn select_si128(mask: __m128i, on_true: __m128i, on_false: __m128i) -> __m128i {
    _mm_or_si128(
        _mm_and_si128(mask, on_true),
        _mm_andnot_si128(mask, on_false),
    )
}

#[inline(always)]
pub(crate) unsafe fn select_ps(mask: __m128, on_true: __m128, on_false: __m128) -> __m128 {
    _mm_or_ps(_mm_and_ps(mask, on_true), _mm_andnot_ps(mask, on_false))
}

/// IEEE-754 `minNum`: `minps` returns its second operand whenever either operand is
/// NaN, so lanes where `b` is NaN are patched back to `a`.
#[inline(always)]
pub(crate) unsafe fn min_num_ps(a: __m128, b: __m128) -> __m128 {
    let b_is_nan = _mm_cmpunord_ps(b, b);
    select_ps(b_is_nan, a, _mm_min_ps(a, b))
}

/// IEEE-754 `maxNum`, see [`min_num_ps`].
#[inline(always)]
pub(crate) unsafe fn max_num_ps(a: __m128, b: __m128) -> __m128 {
    let b_is_nan = _mm_cmpunord_ps(b, b);
    select_ps(b_is_nan, a, _mm_max_ps(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_epi32_three_lanes_zeroes_padding() {
        let data = [7i32, -8, 9, 1234];
        let v = unsafe { load_epi32(data.as_ptr(), 3) };
        assert_eq!(unsafe { to_i32_lanes(v) }, [7, -8, 9, 0]);
    }

    #[test]
    fn test_store_epi32_leaves_tail_untouched() {
        let v = unsafe { _mm_setr_epi32(1, 2, 3, 4) };
        let mut out = [-1i32; 4];
        unsafe { store_epi32(v, out.as_mut_ptr(), 3) };
        assert_eq!(out, [1, 2, 3, -1]);

        let mut out = [-1i32; 4];
        unsafe { store_epi32(v, out.as_mut_ptr(), 2) };
        assert_eq!(out, [1, 2, -1, -1]);
    }

    #[test]
    fn test_extract_and_insert_epi32() {
        let v = unsafe { _mm_setr_epi32(10, 20, 30, 40) };
        for (index, expected) in [10, 20, 30, 40].into_iter().enumerate() {
            assert_eq!(unsafe { extract_epi32(v, index) }, expected);
        }

        let v = unsafe { insert_epi32(v, 2, -5) };
        assert_eq!(unsafe { to_i32_lanes(v) }, [10, 20, -5, 40]);
    }

    #[test]
    fn test_mullo_epi32_matches_wrapping_mul() {
        let a = [3i32, -7, i32::MAX, 65_536];
        let b = [5i32, 9, 2, 65_536];
        let product = unsafe { to_i32_lanes(mullo_epi32(from_i32_lanes(a), from_i32_lanes(b))) };

        for i in 0..LANE_COUNT {
            assert_eq!(product[i], a[i].wrapping_mul(b[i]), "lane {i}");
        }
    }

    #[test]
    fn test_min_max_num_ignore_single_nan() {
        let a = unsafe { _mm_setr_ps(f32::NAN, 1.0, f32::NAN, -2.0) };
        let b = unsafe { _mm_setr_ps(3.0, f32::NAN, f32::NAN, 4.0) };

        let mut min = [0.0f32; 4];
        let mut max = [0.0f32; 4];
        unsafe {
            _mm_storeu_ps(min.as_mut_ptr(), min_num_ps(a, b));
            _mm_storeu_ps(max.as_mut_ptr(), max_num_ps(a, b));
        }

        assert_eq!(min[0], 3.0);
        assert_eq!(min[1], 1.0);
        assert!(min[2].is_nan());
        assert_eq!(min[3], -2.0);

        assert_eq!(max[0], 3.0);
        assert_eq!(max[1], 1.0);
        assert!(max[2].is_nan());
        assert_eq!(max[3], 4.0);
    }
}
