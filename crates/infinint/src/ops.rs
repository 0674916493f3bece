//! Operator trait implementations for [`BigUint`].
//!
//! Only operations that cannot fail are exposed through operators.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Shl, ShlAssign, Shr, ShrAssign};

use crate::biguint::{BigUint, add_limbs, mul_limbs, shl_limbs, shr_limbs};

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $kernel:ident) => {
        impl $trait<&BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> BigUint {
                BigUint::from_limbs($kernel(self.limbs(), rhs.limbs()))
            }
        }

        impl $trait<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> BigUint {
                (&self).$method(rhs)
            }
        }

        impl $trait<BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                self.$method(&rhs)
            }
        }

        impl $assign_trait<&BigUint> for BigUint {
            fn $assign_method(&mut self, rhs: &BigUint) {
                *self = (&*self).$method(rhs);
            }
        }

        impl $assign_trait<BigUint> for BigUint {
            fn $assign_method(&mut self, rhs: BigUint) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add_limbs);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_limbs);

impl Add<u32> for BigUint {
    type Output = Self;

    fn add(self, rhs: u32) -> Self {
        self + Self::from(rhs)
    }
}

impl AddAssign<u32> for BigUint {
    fn add_assign(&mut self, rhs: u32) {
        *self += Self::from(rhs);
    }
}

impl Shl<u32> for &BigUint {
    type Output = BigUint;

    fn shl(self, shift: u32) -> BigUint {
        BigUint::from_limbs(shl_limbs(self.limbs(), shift))
    }
}

impl Shl<u32> for BigUint {
    type Output = Self;

    fn shl(self, shift: u32) -> Self {
        &self << shift
    }
}

impl ShlAssign<u32> for BigUint {
    fn shl_assign(&mut self, shift: u32) {
        *self = &*self << shift;
    }
}

impl Shr<u32> for &BigUint {
    type Output = BigUint;

    fn shr(self, shift: u32) -> BigUint {
        BigUint::from_limbs(shr_limbs(self.limbs(), shift))
    }
}

impl Shr<u32> for BigUint {
    type Output = Self;

    fn shr(self, shift: u32) -> Self {
        &self >> shift
    }
}

impl ShrAssign<u32> for BigUint {
    fn shr_assign(&mut self, shift: u32) {
        *self = &*self >> shift;
    }
}

impl Sum for BigUint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a Self> for BigUint {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| acc + value)
    }
}
