//! Error types for fixsimd operations.
//!
//! The vector operations themselves are total and never fail. These errors are only
//! produced by the checked entry points (`try_get_element`, `try_set_element`,
//! `from_slice`, `store_to_slice`) that validate what the raw operations leave to the
//! caller.

use std::fmt;

/// Errors that can occur in the checked fixsimd entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixsimdError {
    /// A lane index was outside `[0, width)`.
    LaneOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The logical width of the vector.
        width: usize,
    },
    /// A slice held fewer elements than the vector's logical width.
    SliceTooShort {
        /// Number of elements the operation needs.
        required: usize,
        /// Number of elements the slice provided.
        available: usize,
    },
}

impl fmt::Display for FixsimdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixsimdError::LaneOutOfRange { index, width } => write!(
                f,
                "Lane index out of range: {} (vector has {} lanes)",
                index, width
            ),
            FixsimdError::SliceTooShort {
                required,
                available,
            } => write!(
                f,
                "Slice too short: {} elements required, {} available",
                required, available
            ),
        }
    }
}

impl std::error::Error for FixsimdError {}

/// Result type alias for fixsimd operations.
pub type Result<T> = std::result::Result<T, FixsimdError>;

/// Creates a lane-out-of-range error.
pub fn lane_out_of_range(index: usize, width: usize) -> FixsimdError {
    FixsimdError::LaneOutOfRange { index, width }
}

/// Creates a slice-too-short error.
pub fn slice_too_short(required: usize, available: usize) -> FixsimdError {
    FixsimdError::SliceTooShort {
        required,
        available,
    }
}

/// Panics with the lane-out-of-range message.
///
/// Shared by every backend's unchecked accessors so the panic text is identical
/// whichever register layout is compiled in.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn lane_index_panic(index: usize, width: usize) -> ! {
    panic!("{}", lane_out_of_range(index, width))
}
