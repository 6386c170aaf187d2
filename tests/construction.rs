//! Construction and lane access, checked on the active backend and on the fallback.
//!
//! The same generic checks run over every vector type of both backends, so a
//! register layout that leaks padding or mis-orders lanes shows up as a mismatch
//! against the plain-array representation.

use std::panic::{catch_unwind, AssertUnwindSafe};

use fixsimd::{
    prelude::*,
    simd::{Active, Fallback},
    FixsimdError,
};

/// `from_slice` then `get_element` returns every lane in order.
fn check_round_trip<V: SimdVector>(lanes: &[V::Element]) {
    assert_eq!(lanes.len(), V::WIDTH);

    let v = V::from_slice(lanes).unwrap();
    for (i, &expected) in lanes.iter().enumerate() {
        assert_eq!(v.get_element(i), expected, "lane {i} of {v:?}");
    }
}

fn check_zero_and_broadcast<V: SimdVector>(value: V::Element) {
    let zero = V::make_zero();
    let broadcast = V::make_repeating_element(value);

    for i in 0..V::WIDTH {
        assert_eq!(zero.get_element(i), V::Element::default(), "zero lane {i}");
        assert_eq!(broadcast.get_element(i), value, "broadcast lane {i}");
    }
    assert_eq!(V::default(), zero);
}

/// Loads and stores touch exactly `WIDTH` elements, and index `WIDTH` is unreachable.
fn check_width_is_exact<V: SimdVector>(lanes: &[V::Element], sentinel: V::Element) {
    let mut source = lanes.to_vec();
    source.push(sentinel);
    let v = V::from_slice(&source).unwrap();

    let mut out = vec![sentinel; V::WIDTH + 1];
    v.store_to_slice(&mut out).unwrap();
    assert_eq!(&out[..V::WIDTH], lanes);
    let past_end = out[V::WIDTH];
    assert_eq!(past_end, sentinel, "store wrote past the logical width");

    assert_eq!(
        v.try_get_element(V::WIDTH),
        Err(FixsimdError::LaneOutOfRange {
            index: V::WIDTH,
            width: V::WIDTH
        })
    );
    assert!(catch_unwind(AssertUnwindSafe(|| v.get_element(V::WIDTH))).is_err());

    assert_eq!(
        V::from_slice(&lanes[..V::WIDTH - 1]),
        Err(FixsimdError::SliceTooShort {
            required: V::WIDTH,
            available: V::WIDTH - 1
        })
    );
}

/// `set_element` changes one lane and nothing else.
fn check_set_element<V: SimdVector>(lanes: &[V::Element], replacement: V::Element) {
    for target in 0..V::WIDTH {
        let mut v = V::from_slice(lanes).unwrap();
        v.set_element(target, replacement);

        for i in 0..V::WIDTH {
            let expected = if i == target { replacement } else { lanes[i] };
            assert_eq!(
                v.get_element(i),
                expected,
                "lane {i} after setting {target}"
            );
        }
    }

    let mut v = V::from_slice(lanes).unwrap();
    assert!(v.try_set_element(V::WIDTH, replacement).is_err());
    assert_eq!(v, V::from_slice(lanes).unwrap());
}

macro_rules! construction_tests {
    ($module:ident, $backend:ty) => {
        mod $module {
            use super::*;

            type B = $backend;

            #[test]
            fn test_round_trip() {
                check_round_trip::<<B as Backend>::Float32x2>(&[1.5, -2.0]);
                check_round_trip::<<B as Backend>::Float32x3>(&[1.0, 2.0, 3.0]);
                check_round_trip::<<B as Backend>::Float32x4>(&[-0.5, f32::MAX, f32::MIN, 4.0]);
                check_round_trip::<<B as Backend>::Int32x2>(&[i32::MIN, i32::MAX]);
                check_round_trip::<<B as Backend>::Int32x3>(&[-1, 0, 1]);
                check_round_trip::<<B as Backend>::Int32x4>(&[4, -3, 2, -1]);
                check_round_trip::<<B as Backend>::UInt32x2>(&[6, 3]);
                check_round_trip::<<B as Backend>::UInt32x3>(&[u32::MAX, 0, 0x8000_0000]);
                check_round_trip::<<B as Backend>::UInt32x4>(&[1, 2, 3, 4]);
                check_round_trip::<<B as Backend>::Int64x2>(&[i64::MIN, 1 << 40]);
                check_round_trip::<<B as Backend>::UInt64x2>(&[u64::MAX, 17]);
            }

            #[test]
            fn test_zero_and_broadcast() {
                check_zero_and_broadcast::<<B as Backend>::Float32x2>(-3.25);
                check_zero_and_broadcast::<<B as Backend>::Float32x3>(7.0);
                check_zero_and_broadcast::<<B as Backend>::Float32x4>(f32::INFINITY);
                check_zero_and_broadcast::<<B as Backend>::Int32x2>(-9);
                check_zero_and_broadcast::<<B as Backend>::Int32x3>(i32::MAX);
                check_zero_and_broadcast::<<B as Backend>::Int32x4>(12);
                check_zero_and_broadcast::<<B as Backend>::UInt32x2>(u32::MAX);
                check_zero_and_broadcast::<<B as Backend>::UInt32x3>(5);
                check_zero_and_broadcast::<<B as Backend>::UInt32x4>(0xDEAD_BEEF);
                check_zero_and_broadcast::<<B as Backend>::Int64x2>(-(1 << 50));
                check_zero_and_broadcast::<<B as Backend>::UInt64x2>(u64::MAX);
            }

            #[test]
            fn test_width_is_exact() {
                check_width_is_exact::<<B as Backend>::Float32x2>(&[1.0, 2.0], 99.0);
                check_width_is_exact::<<B as Backend>::Float32x3>(&[1.0, 2.0, 3.0], 99.0);
                check_width_is_exact::<<B as Backend>::Float32x4>(&[1.0, 2.0, 3.0, 4.0], 99.0);
                check_width_is_exact::<<B as Backend>::Int32x2>(&[-1, -2], 99);
                check_width_is_exact::<<B as Backend>::Int32x3>(&[-1, -2, -3], 99);
                check_width_is_exact::<<B as Backend>::Int32x4>(&[-1, -2, -3, -4], 99);
                check_width_is_exact::<<B as Backend>::UInt32x2>(&[1, 2], 99);
                check_width_is_exact::<<B as Backend>::UInt32x3>(&[1, 2, 3], 99);
                check_width_is_exact::<<B as Backend>::UInt32x4>(&[1, 2, 3, 4], 99);
                check_width_is_exact::<<B as Backend>::Int64x2>(&[-1, 1], 99);
                check_width_is_exact::<<B as Backend>::UInt64x2>(&[1, 2], 99);
            }

            #[test]
            fn test_set_element() {
                check_set_element::<<B as Backend>::Float32x2>(&[1.0, 2.0], -8.5);
                check_set_element::<<B as Backend>::Float32x3>(&[1.0, 2.0, 3.0], -8.5);
                check_set_element::<<B as Backend>::Float32x4>(&[1.0, 2.0, 3.0, 4.0], -8.5);
                check_set_element::<<B as Backend>::Int32x2>(&[1, 2], i32::MIN);
                check_set_element::<<B as Backend>::Int32x3>(&[1, 2, 3], i32::MIN);
                check_set_element::<<B as Backend>::Int32x4>(&[1, 2, 3, 4], i32::MIN);
                check_set_element::<<B as Backend>::UInt32x2>(&[1, 2], u32::MAX);
                check_set_element::<<B as Backend>::UInt32x3>(&[1, 2, 3], u32::MAX);
                check_set_element::<<B as Backend>::UInt32x4>(&[1, 2, 3, 4], u32::MAX);
                check_set_element::<<B as Backend>::Int64x2>(&[1, 2], i64::MAX);
                check_set_element::<<B as Backend>::UInt64x2>(&[1, 2], u64::MAX);
            }
        }
    };
}

construction_tests!(active_backend, Active);
construction_tests!(fallback_backend, Fallback);

mod concrete_types {
    use fixsimd::{
        simd::fallback as scalar, Float32x2, Float32x3, Float32x4, Int32x3, Int64x2, UInt32x2,
        UInt32x4, UInt64x2,
    };

    use super::*;

    #[test]
    fn test_make_orders_lanes() {
        assert_eq!(Float32x3::make(1.0, 2.0, 3.0).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(UInt32x4::make(4, 3, 2, 1).to_array(), [4, 3, 2, 1]);
        assert_eq!(Int64x2::make(-5, 5).get_element(1), 5);
    }

    #[test]
    fn test_array_conversions() {
        let v = Float32x4::from([1.0, 2.0, 3.0, 4.0]);
        let lanes: [f32; 4] = v.into();
        assert_eq!(lanes, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(UInt32x2::from_array([6, 3]), UInt32x2::make(6, 3));
    }

    #[test]
    fn test_equality_compares_logical_lanes() {
        let v = Float32x3::make(1.0, 2.0, 3.0);
        assert_eq!(v, Float32x3::make(1.0, 2.0, 3.0));
        assert_ne!(v, Float32x3::make(1.0, 2.0, 4.0));
        assert_ne!(
            Float32x3::make(f32::NAN, 0.0, 0.0),
            Float32x3::make(f32::NAN, 0.0, 0.0)
        );
    }

    /// `Debug` output is the same whichever backend holds the lanes.
    fn check_debug_matches_fallback<A: SimdVector, F: SimdVector<Element = A::Element>>(
        lanes: &[A::Element],
    ) {
        let active = A::from_slice(lanes).unwrap();
        let fallback = F::from_slice(lanes).unwrap();
        assert_eq!(format!("{active:?}"), format!("{fallback:?}"));
    }

    #[test]
    fn test_debug_is_backend_independent() {
        let float = Float32x3::make(1.0, 2.0, 3.0);
        assert_eq!(format!("{float:?}"), "Float32x3([1.0, 2.0, 3.0])");

        check_debug_matches_fallback::<Float32x2, scalar::Float32x2>(&[1.5, -2.0]);
        check_debug_matches_fallback::<Int32x3, scalar::Int32x3>(&[-1, 0, 1]);
        check_debug_matches_fallback::<UInt32x4, scalar::UInt32x4>(&[1, 2, 3, 4]);
        check_debug_matches_fallback::<Int64x2, scalar::Int64x2>(&[i64::MIN, 7]);
        check_debug_matches_fallback::<UInt64x2, scalar::UInt64x2>(&[u64::MAX, 0]);
    }

    #[test]
    #[should_panic(expected = "Lane index out of range: 3 (vector has 3 lanes)")]
    fn test_padding_lane_is_not_addressable() {
        let v = Float32x3::make(1.0, 2.0, 3.0);
        let _ = v.get_element(3);
    }
}
