//! Backends and the operation traits they share.
//!
//! Each backend module defines the same eleven vector types under the same names.
//! Exactly one of them is *active*, chosen by the build script through a `cfg` flag
//! (`neon`, `sse2` or `fallback`); the crate root re-exports the active set. The
//! scalar fallback is compiled on every target so that code written against
//! [`Backend`] can compare the active backend with it.
//!
//! ```
//! use fixsimd::simd::{Active, Backend};
//! use fixsimd::prelude::*;
//!
//! fn sum_lanes<B: Backend>(v: B::Float32x4) -> f32 {
//!     (0..4).map(|i| v.get_element(i)).sum()
//! }
//!
//! let v = <Active as Backend>::Float32x4::make_repeating_element(1.5);
//! assert_eq!(sum_lanes::<Active>(v), 6.0);
//! ```

use crate::element::{Float32, Int32, Int64, UInt32, UInt64};

use traits::{SimdArithmetic, SimdDivide, SimdMinMax, SimdShift, SimdSigned};

pub mod traits;

pub(crate) mod ops;

pub mod fallback;

#[cfg(neon)]
pub mod neon;

#[cfg(sse2)]
pub mod sse2;

/// One complete set of vector types.
///
/// The bounds encode which operations each element family supports: float32 has
/// division, uint32 has the bitwise and shift operations, int64 has no min/max and
/// uint64 only the common arithmetic.
pub trait Backend: 'static {
    /// Name matching the build script's `cfg` flag.
    const NAME: &'static str;

    type Float32x2: SimdDivide<Element = Float32> + SimdMinMax;
    type Float32x3: SimdDivide<Element = Float32> + SimdMinMax;
    type Float32x4: SimdDivide<Element = Float32> + SimdMinMax;

    type Int32x2: SimdSigned<Element = Int32> + SimdMinMax;
    type Int32x3: SimdSigned<Element = Int32> + SimdMinMax;
    type Int32x4: SimdSigned<Element = Int32> + SimdMinMax;

    type UInt32x2: SimdShift<Element = UInt32> + SimdArithmetic + SimdMinMax;
    type UInt32x3: SimdShift<Element = UInt32> + SimdArithmetic + SimdMinMax;
    type UInt32x4: SimdShift<Element = UInt32> + SimdArithmetic + SimdMinMax;

    type Int64x2: SimdSigned<Element = Int64>;
    type UInt64x2: SimdArithmetic<Element = UInt64>;
}

macro_rules! impl_backend {
    ($marker:ident, $name:literal, $module:ident) => {
        impl Backend for $marker {
            const NAME: &'static str = $name;

            type Float32x2 = $module::Float32x2;
            type Float32x3 = $module::Float32x3;
            type Float32x4 = $module::Float32x4;

            type Int32x2 = $module::Int32x2;
            type Int32x3 = $module::Int32x3;
            type Int32x4 = $module::Int32x4;

            type UInt32x2 = $module::UInt32x2;
            type UInt32x3 = $module::UInt32x3;
            type UInt32x4 = $module::UInt32x4;

            type Int64x2 = $module::Int64x2;
            type UInt64x2 = $module::UInt64x2;
        }
    };
}

/// Scalar-array backend, available on every target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fallback;

impl_backend!(Fallback, "fallback", fallback);

/// AArch64 NEON backend.
#[cfg(neon)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neon;

#[cfg(neon)]
impl_backend!(Neon, "neon", neon);

/// x86 / x86_64 SSE2 backend.
#[cfg(sse2)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sse2;

#[cfg(sse2)]
impl_backend!(Sse2, "sse2", sse2);

/// The backend selected for this build.
#[cfg(neon)]
pub type Active = Neon;

/// The backend selected for this build.
#[cfg(sse2)]
pub type Active = Sse2;

/// The backend selected for this build.
#[cfg(fallback)]
pub type Active = Fallback;

/// The operation traits and [`Backend`], for glob import.
pub mod prelude {
    pub use super::traits::{
        SimdArithmetic, SimdBitwise, SimdDivide, SimdMinMax, SimdShift, SimdSigned, SimdVector,
    };
    pub use super::Backend;
}
