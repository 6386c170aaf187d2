use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{
    element::{Element, FloatElement, OrderedElement, SignedElement},
    simd::traits::{SimdArithmetic, SimdDivide, SimdMinMax, SimdSigned},
};

use super::lanes::Lanes;

impl<T: Element, const N: usize> Lanes<T, N> {
    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        let lanes = self.to_array();
        Self::from_array(core::array::from_fn(|i| f(lanes[i])))
    }

    #[inline(always)]
    pub(crate) fn zip_map(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        Self::from_array(core::array::from_fn(|i| f(a[i], b[i])))
    }
}

impl<T: Element, const N: usize> SimdArithmetic for Lanes<T, N> {
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_add)
    }

    #[inline(always)]
    fn subtract(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_sub)
    }

    #[inline(always)]
    fn multiply(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_mul)
    }
}

impl<T: SignedElement, const N: usize> SimdSigned for Lanes<T, N> {
    #[inline(always)]
    fn negate(self) -> Self {
        self.map(T::lane_neg)
    }

    #[inline(always)]
    fn absolute(self) -> Self {
        self.map(T::lane_abs)
    }
}

impl<T: FloatElement, const N: usize> SimdDivide for Lanes<T, N> {
    /// No padding lanes exist here, so the divisor is used as is.
    #[inline(always)]
    fn divide(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_div)
    }
}

impl<T: OrderedElement, const N: usize> SimdMinMax for Lanes<T, N> {
    #[inline(always)]
    fn minimum(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_min)
    }

    #[inline(always)]
    fn maximum(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_max)
    }
}

impl<T: Element, const N: usize> Add for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        SimdArithmetic::add(self, rhs)
    }
}

impl<T: Element, const N: usize> AddAssign for Lanes<T, N> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Element, const N: usize> Sub for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T: Element, const N: usize> SubAssign for Lanes<T, N> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Element, const N: usize> Mul for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Element, const N: usize> MulAssign for Lanes<T, N> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: SignedElement, const N: usize> Neg for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: FloatElement, const N: usize> Div for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T: FloatElement, const N: usize> DivAssign for Lanes<T, N> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
