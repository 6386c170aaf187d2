use std::fmt;

use crate::{element::Element, error::lane_index_panic, simd::traits::SimdVector};

/// `N` lanes of `T` stored as a plain array.
#[derive(Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Lanes<T: Element, const N: usize> {
    elements: [T; N],
}

impl<T: Element, const N: usize> Lanes<T, N> {
    /// Builds a vector from its lanes, least significant first.
    #[inline(always)]
    pub fn from_array(elements: [T; N]) -> Self {
        Self { elements }
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.elements
    }
}

impl<T: Element> Lanes<T, 2> {
    #[inline(always)]
    pub fn make(e0: T, e1: T) -> Self {
        Self::from_array([e0, e1])
    }
}

impl<T: Element> Lanes<T, 3> {
    #[inline(always)]
    pub fn make(e0: T, e1: T, e2: T) -> Self {
        Self::from_array([e0, e1, e2])
    }
}

impl<T: Element> Lanes<T, 4> {
    #[inline(always)]
    pub fn make(e0: T, e1: T, e2: T, e3: T) -> Self {
        Self::from_array([e0, e1, e2, e3])
    }
}

impl<T: Element, const N: usize> SimdVector for Lanes<T, N> {
    type Element = T;

    const WIDTH: usize = N;

    #[inline(always)]
    fn make_repeating_element(value: T) -> Self {
        Self::from_array([value; N])
    }

    #[inline(always)]
    unsafe fn make_load(ptr: *const T) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let elements = core::array::from_fn(|i| unsafe { ptr.add(i).read_unaligned() });
        Self::from_array(elements)
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut T) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        for (i, &lane) in self.elements.iter().enumerate() {
            unsafe { ptr.add(i).write_unaligned(lane) };
        }
    }

    #[inline(always)]
    #[track_caller]
    fn get_element(self, index: usize) -> T {
        match self.elements.get(index) {
            Some(&lane) => lane,
            None => lane_index_panic(index, N),
        }
    }

    #[inline(always)]
    #[track_caller]
    fn set_element(&mut self, index: usize, value: T) {
        match self.elements.get_mut(index) {
            Some(lane) => *lane = value,
            None => lane_index_panic(index, N),
        }
    }
}

impl<T: Element, const N: usize> Default for Lanes<T, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::make_zero()
    }
}

impl<T: Element, const N: usize> fmt::Debug for Lanes<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}({:?})", T::FAMILY, N, self.elements)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Lanes<T, N> {
    #[inline(always)]
    fn from(elements: [T; N]) -> Self {
        Self::from_array(elements)
    }
}

impl<T: Element, const N: usize> From<Lanes<T, N>> for [T; N] {
    #[inline(always)]
    fn from(vector: Lanes<T, N>) -> Self {
        vector.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixsimdError;

    mod construction_tests {
        use super::*;

        #[test]
        fn test_make_places_lanes_in_order() {
            let v = Lanes::<f32, 3>::make(1.0, 2.0, 3.0);
            assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);

            let v = Lanes::<u32, 4>::make(4, 3, 2, 1);
            assert_eq!(v.to_array(), [4, 3, 2, 1]);
        }

        #[test]
        fn test_make_zero_and_repeating() {
            assert_eq!(Lanes::<i32, 4>::make_zero().to_array(), [0; 4]);
            assert_eq!(
                Lanes::<i64, 2>::make_repeating_element(-7).to_array(),
                [-7, -7]
            );
            assert_eq!(Lanes::<f32, 2>::default().to_array(), [0.0, 0.0]);
        }

        #[test]
        fn test_make_load_reads_exactly_width() {
            let data = [9u64, 8, 7];
            let v = unsafe { Lanes::<u64, 2>::make_load(data.as_ptr()) };
            assert_eq!(v.to_array(), [9, 8]);
        }

        #[test]
        fn test_make_load_unaligned_pointer() {
            // Offset a byte buffer so the f32 view sits on an odd address.
            let mut bytes = [0u8; 1 + 3 * 4];
            for (i, value) in [1.5f32, -2.5, 3.25].iter().enumerate() {
                bytes[1 + i * 4..1 + (i + 1) * 4].copy_from_slice(&value.to_ne_bytes());
            }

            let ptr = unsafe { bytes.as_ptr().add(1) } as *const f32;
            let v = unsafe { Lanes::<f32, 3>::make_load(ptr) };
            assert_eq!(v.to_array(), [1.5, -2.5, 3.25]);
        }

        #[test]
        fn test_store_writes_exactly_width() {
            let mut out = [0i32; 4];
            unsafe { Lanes::<i32, 3>::make(1, 2, 3).store(out.as_mut_ptr()) };
            assert_eq!(out, [1, 2, 3, 0]);
        }
    }

    mod access_tests {
        use super::*;

        #[test]
        fn test_set_element_touches_one_lane() {
            let mut v = Lanes::<u32, 4>::make(1, 2, 3, 4);
            v.set_element(2, 30);
            assert_eq!(v.to_array(), [1, 2, 30, 4]);
        }

        #[test]
        fn test_checked_access() {
            let mut v = Lanes::<f32, 2>::make(1.0, 2.0);
            assert_eq!(v.try_get_element(1), Ok(2.0));
            assert_eq!(
                v.try_get_element(2),
                Err(FixsimdError::LaneOutOfRange { index: 2, width: 2 })
            );
            assert!(v.try_set_element(5, 0.0).is_err());
            assert_eq!(v.to_array(), [1.0, 2.0]);
        }

        #[test]
        fn test_slice_round_trip() {
            let v = Lanes::<i64, 2>::from_slice(&[5, 6, 7]).unwrap();
            let mut out = [0i64; 2];
            v.store_to_slice(&mut out).unwrap();
            assert_eq!(out, [5, 6]);

            assert_eq!(
                Lanes::<i64, 2>::from_slice(&[5]),
                Err(FixsimdError::SliceTooShort {
                    required: 2,
                    available: 1
                })
            );
        }

        #[test]
        fn test_debug_names_the_vector_type() {
            let float = Lanes::<f32, 3>::make(1.0, 2.0, 3.0);
            assert_eq!(format!("{float:?}"), "Float32x3([1.0, 2.0, 3.0])");

            let unsigned = Lanes::<u32, 2>::make(6, 3);
            assert_eq!(format!("{unsigned:?}"), "UInt32x2([6, 3])");

            let wide = Lanes::<i64, 2>::make(-1, 1);
            assert_eq!(format!("{wide:?}"), "Int64x2([-1, 1])");
        }

        #[test]
        #[should_panic(expected = "Lane index out of range: 3 (vector has 3 lanes)")]
        fn test_get_element_out_of_range_panics() {
            let v = Lanes::<i32, 3>::make(1, 2, 3);
            let _ = v.get_element(3);
        }
    }
}
