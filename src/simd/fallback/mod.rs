//! Portable scalar-array backend.
//!
//! Every vector is a plain `[T; N]` with exactly as many lanes as its logical
//! width, so there is no padding to manage. The operations are written once,
//! generically, over the lane traits in [`crate::element`]; the type aliases below
//! pin them to the eleven (element, width) pairs the other backends provide.
//!
//! This module is always compiled. When no SIMD backend is selected it is the
//! active backend; otherwise it still serves as the reference implementation the
//! register-backed types are checked against.
//!
//! Only the eleven widths below are exposed; the generic array type behind them
//! cannot be named outside the crate.
//!
//! ```compile_fail
//! use fixsimd::prelude::*;
//!
//! let _ = fixsimd::simd::fallback::lanes::Lanes::<f32, 7>::make_zero();
//! ```

mod arithmetic;

mod bitwise;

mod lanes;

use lanes::Lanes;

use crate::element::{Float32, Int32, Int64, UInt32, UInt64};

pub type Float32x2 = Lanes<Float32, 2>;
pub type Float32x3 = Lanes<Float32, 3>;
pub type Float32x4 = Lanes<Float32, 4>;

pub type Int32x2 = Lanes<Int32, 2>;
pub type Int32x3 = Lanes<Int32, 3>;
pub type Int32x4 = Lanes<Int32, 4>;

pub type UInt32x2 = Lanes<UInt32, 2>;
pub type UInt32x3 = Lanes<UInt32, 3>;
pub type UInt32x4 = Lanes<UInt32, 4>;

pub type Int64x2 = Lanes<Int64, 2>;
pub type UInt64x2 = Lanes<UInt64, 2>;
