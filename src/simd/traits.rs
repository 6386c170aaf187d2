use std::fmt::Debug;

use num::Zero;

use crate::{
    element::Element,
    error::{lane_out_of_range, slice_too_short, Result},
};

/// Construction and lane access shared by every vector type.
///
/// Lanes are numbered from the least significant position. A backend may hold more
/// physical lanes than `WIDTH`; those padding lanes are zero after every operation
/// and are never reachable through this trait.
pub trait SimdVector: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    type Element: Element;

    /// Number of logical lanes.
    const WIDTH: usize;

    /// Vector with every logical lane set to `value`.
    fn make_repeating_element(value: Self::Element) -> Self;

    /// Vector with every lane set to zero.
    #[inline(always)]
    fn make_zero() -> Self {
        Self::make_repeating_element(Self::Element::zero())
    }

    /// Loads exactly `WIDTH` elements from `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `WIDTH` consecutive elements. No alignment
    /// beyond that of the element type is required, and nothing past the last
    /// logical element is read.
    unsafe fn make_load(ptr: *const Self::Element) -> Self;

    /// Writes exactly `WIDTH` elements to `ptr`. Padding lanes are never written.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `WIDTH` consecutive elements.
    unsafe fn store(self, ptr: *mut Self::Element);

    /// Returns lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= WIDTH`.
    fn get_element(self, index: usize) -> Self::Element;

    /// Replaces lane `index`, leaving every other lane untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index >= WIDTH`.
    fn set_element(&mut self, index: usize, value: Self::Element);

    /// Checked form of [`SimdVector::make_load`] reading the first `WIDTH` elements of `slice`.
    #[inline]
    fn from_slice(slice: &[Self::Element]) -> Result<Self> {
        if slice.len() < Self::WIDTH {
            return Err(slice_too_short(Self::WIDTH, slice.len()));
        }

        // SAFETY: the slice holds at least WIDTH readable elements.
        Ok(unsafe { Self::make_load(slice.as_ptr()) })
    }

    /// Checked form of [`SimdVector::store`] writing into the first `WIDTH` elements of `out`.
    #[inline]
    fn store_to_slice(self, out: &mut [Self::Element]) -> Result<()> {
        if out.len() < Self::WIDTH {
            return Err(slice_too_short(Self::WIDTH, out.len()));
        }

        // SAFETY: the slice holds at least WIDTH writable elements.
        unsafe { self.store(out.as_mut_ptr()) };
        Ok(())
    }

    #[inline]
    fn try_get_element(self, index: usize) -> Result<Self::Element> {
        if index >= Self::WIDTH {
            return Err(lane_out_of_range(index, Self::WIDTH));
        }

        Ok(self.get_element(index))
    }

    #[inline]
    fn try_set_element(&mut self, index: usize, value: Self::Element) -> Result<()> {
        if index >= Self::WIDTH {
            return Err(lane_out_of_range(index, Self::WIDTH));
        }

        self.set_element(index, value);
        Ok(())
    }
}

/// Lane-wise add, subtract and multiply. Integer lanes wrap on overflow.
pub trait SimdArithmetic: SimdVector {
    fn add(self, rhs: Self) -> Self;
    fn subtract(self, rhs: Self) -> Self;
    fn multiply(self, rhs: Self) -> Self;
}

/// Negation and absolute value, for signed integer and float lanes.
pub trait SimdSigned: SimdArithmetic {
    fn negate(self) -> Self;
    fn absolute(self) -> Self;
}

/// Lane-wise floating point division.
///
/// Logical lanes always hold `lhs[i] / rhs[i]`, including IEEE-754 infinities and
/// NaN for zero divisors. Padding lanes of the result stay zero.
pub trait SimdDivide: SimdSigned {
    fn divide(self, rhs: Self) -> Self;
}

/// Lane-wise minimum and maximum (`minNum`/`maxNum` for floats).
pub trait SimdMinMax: SimdVector {
    fn minimum(self, rhs: Self) -> Self;
    fn maximum(self, rhs: Self) -> Self;
}

/// Bitwise operations over unsigned integer lanes.
pub trait SimdBitwise: SimdVector {
    fn bitwise_not(self) -> Self;
    fn bitwise_and(self, rhs: Self) -> Self;
    fn bitwise_or(self, rhs: Self) -> Self;
    fn bitwise_exclusive_or(self, rhs: Self) -> Self;

    /// `!self & rhs`.
    #[inline(always)]
    fn bitwise_and_not(self, rhs: Self) -> Self {
        self.bitwise_not().bitwise_and(rhs)
    }
}

/// Logical shifts over unsigned integer lanes.
///
/// Shift amounts of the element width or more give an unspecified lane value.
pub trait SimdShift: SimdBitwise {
    fn shift_left_element_wise(self, rhs: Self) -> Self;
    fn shift_right_element_wise(self, rhs: Self) -> Self;

    #[inline(always)]
    fn shift_left(self, amount: Self::Element) -> Self {
        self.shift_left_element_wise(Self::make_repeating_element(amount))
    }

    #[inline(always)]
    fn shift_right(self, amount: Self::Element) -> Self {
        self.shift_right_element_wise(Self::make_repeating_element(amount))
    }
}
