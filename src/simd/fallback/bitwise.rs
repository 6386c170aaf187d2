use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::{
    element::BitElement,
    simd::traits::{SimdBitwise, SimdShift},
};

use super::lanes::Lanes;

impl<T: BitElement, const N: usize> SimdBitwise for Lanes<T, N> {
    #[inline(always)]
    fn bitwise_not(self) -> Self {
        Self::from_array(self.to_array().map(T::lane_not))
    }

    #[inline(always)]
    fn bitwise_and(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_and)
    }

    #[inline(always)]
    fn bitwise_or(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_or)
    }

    #[inline(always)]
    fn bitwise_exclusive_or(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_xor)
    }
}

impl<T: BitElement, const N: usize> SimdShift for Lanes<T, N> {
    #[inline(always)]
    fn shift_left_element_wise(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_shl)
    }

    #[inline(always)]
    fn shift_right_element_wise(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_shr)
    }
}

impl<T: BitElement, const N: usize> Not for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self.bitwise_not()
    }
}

impl<T: BitElement, const N: usize> BitAnd for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.bitwise_and(rhs)
    }
}

impl<T: BitElement, const N: usize> BitAndAssign for Lanes<T, N> {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<T: BitElement, const N: usize> BitOr for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.bitwise_or(rhs)
    }
}

impl<T: BitElement, const N: usize> BitOrAssign for Lanes<T, N> {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<T: BitElement, const N: usize> BitXor for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.bitwise_exclusive_or(rhs)
    }
}

impl<T: BitElement, const N: usize> BitXorAssign for Lanes<T, N> {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<T: BitElement, const N: usize> Shl for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: Self) -> Self::Output {
        self.shift_left_element_wise(rhs)
    }
}

impl<T: BitElement, const N: usize> Shr for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: Self) -> Self::Output {
        self.shift_right_element_wise(rhs)
    }
}

impl<const N: usize> Shl<u32> for Lanes<u32, N> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, amount: u32) -> Self::Output {
        self.shift_left(amount)
    }
}

impl<const N: usize> Shr<u32> for Lanes<u32, N> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, amount: u32) -> Self::Output {
        self.shift_right(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{
        fallback::{UInt32x2, UInt32x3, UInt32x4},
        traits::SimdVector,
    };

    #[test]
    fn test_bitwise_identities() {
        let a = UInt32x4::make(0xDEAD_BEEF, 0, u32::MAX, 0x0F0F_0F0F);
        let b = UInt32x4::make(0xFFFF_0000, 0x1234, 1, 0xF0F0_F0F0);

        assert_eq!((a & !a).to_array(), [0; 4]);
        assert_eq!((a | !a).to_array(), [u32::MAX; 4]);
        assert_eq!((a ^ a).to_array(), [0; 4]);
        assert_eq!(a.bitwise_and_not(b), !a & b);
        assert_eq!((a | b).to_array()[3], u32::MAX);
    }

    #[test]
    fn test_shift_by_scalar_and_vector() {
        let v = UInt32x3::make(1, 2, 0x8000_0000);
        assert_eq!((v << 1u32).to_array(), [2, 4, 0]);
        assert_eq!((v >> 1u32).to_array(), [0, 1, 0x4000_0000]);

        let amounts = UInt32x3::make(0, 4, 31);
        assert_eq!((v << amounts).to_array(), [1, 32, 0]);
        assert_eq!((v >> amounts).to_array(), [1, 0, 1]);
    }

    #[test]
    fn test_shift_identity() {
        let v = UInt32x4::make(7, u32::MAX, 0, 0x8000_0001);
        assert_eq!(v.shift_left(0), v);
        assert_eq!(v.shift_right(0), v);
    }

    #[test]
    fn test_shift_then_xor_scenario() {
        let v = UInt32x2::make(6, 3).shift_right(1);
        assert_eq!(v.to_array(), [3, 1]);
        assert_eq!(v.bitwise_exclusive_or(v), UInt32x2::make_zero());
    }
}
