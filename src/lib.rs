//! Fixed-width numeric vectors with one meaning on every architecture.
//!
//! `fixsimd` provides eleven small vector types (`Float32x2/3/4`, `Int32x2/3/4`,
//! `UInt32x2/3/4`, `Int64x2`, `UInt64x2`). Each is backed by a NEON register on
//! AArch64, an SSE2 register on x86/x86_64, or a plain array elsewhere. The backend
//! is picked at build time; the logical result of every operation is the same on
//! all three.
//!
//! Vectors whose width does not fill their register (three `f32` in a 128-bit
//! register, for example) carry padding lanes. Those lanes are kept at zero and are
//! never visible through the API: loads and stores touch exactly `WIDTH` elements,
//! and division substitutes a safe divisor there.
//!
//! # Example
//!
//! ```
//! use fixsimd::prelude::*;
//! use fixsimd::{Float32x3, UInt32x2};
//!
//! let position = Float32x3::make(1.0, 2.0, 3.0);
//! let scale = Float32x3::make_repeating_element(2.0);
//! assert_eq!((position * scale).to_array(), [2.0, 4.0, 6.0]);
//!
//! let flags = UInt32x2::make(6, 3).shift_right(1);
//! assert_eq!(flags.to_array(), [3, 1]);
//! ```
//!
//! # Backend Selection
//!
//! The build script emits one of `cfg(neon)`, `cfg(sse2)` or `cfg(fallback)` from the
//! target architecture and features. Enabling the `force-fallback` feature selects
//! the scalar backend everywhere.

pub mod element;

pub mod error;

pub mod simd;

pub use element::{Float32, Int32, Int64, UInt32, UInt64};
pub use error::{FixsimdError, Result};
pub use simd::{prelude, Active, Backend};

#[cfg(neon)]
pub use simd::neon::{
    Float32x2, Float32x3, Float32x4, Int32x2, Int32x3, Int32x4, Int64x2, UInt32x2, UInt32x3,
    UInt32x4, UInt64x2,
};

#[cfg(sse2)]
pub use simd::sse2::{
    Float32x2, Float32x3, Float32x4, Int32x2, Int32x3, Int32x4, Int64x2, UInt32x2, UInt32x3,
    UInt32x4, UInt64x2,
};

#[cfg(fallback)]
pub use simd::fallback::{
    Float32x2, Float32x3, Float32x4, Int32x2, Int32x3, Int32x4, Int64x2, UInt32x2, UInt32x3,
    UInt32x4, UInt64x2,
};
