//! AArch64 NEON backend.
//!
//! NEON has both 64-bit (`d`) and 128-bit (`q`) registers, so 2-lane 32-bit vectors
//! need no padding at all:
//!
//! | Type | Register | Logical lanes | Padding lanes |
//! |---|---|---|---|
//! | `Float32x2` / `Int32x2` / `UInt32x2` | `float32x2_t` / `int32x2_t` / `uint32x2_t` | 2 | 0 |
//! | `Float32x3` / `Int32x3` / `UInt32x3` | `float32x4_t` / `int32x4_t` / `uint32x4_t` | 3 | 1 |
//! | `Float32x4` / `Int32x4` / `UInt32x4` | `float32x4_t` / `int32x4_t` / `uint32x4_t` | 4 | 0 |
//! | `Int64x2` / `UInt64x2` | `int64x2_t` / `uint64x2_t` | 2 | 0 |
//!
//! The padding lane of the 3-lane types is zero after construction and after every
//! operation. A 3-lane load combines a 64-bit load with a single-lane load, so it
//! never reads a fourth element from memory.
//!
//! # Architecture Requirements
//!
//! - **Target Architecture**: AArch64, where NEON is part of the base ISA
//! - **Runtime Detection**: none, the build script selects this backend from the target
//!
//! # Conditional Compilation
//!
//! This module is only compiled when the build script selects the `neon` backend.

/// Reads lane `$index` of `$v` with a const-generic lane intrinsic.
///
/// The caller has already checked `$index` against the logical width.
macro_rules! get_lane {
    ($intrinsic:ident, $v:expr, $index:expr, [$($lane:literal),+]) => {
        match $index {
            $($lane => $intrinsic::<$lane>($v),)+
            _ => unreachable!("Lane index already checked"),
        }
    };
}

/// Replaces lane `$index` of `$v` with `$value`.
macro_rules! set_lane {
    ($intrinsic:ident, $value:expr, $v:expr, $index:expr, [$($lane:literal),+]) => {
        match $index {
            $($lane => $intrinsic::<$lane>($value, $v),)+
            _ => unreachable!("Lane index already checked"),
        }
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
