/// Describes a number's associated constants: minimum and maximum; zero, one.
pub trait NumberConst {
    const MIN: Self;
    const MAX: Self;
    const ONE: Self;
    const ZERO: Self;
}

/// Describes a number that can be compared to zero.
pub trait IsZero {
    /// Return true if the number is zero; false otherwise.
    fn is_zero(&self) -> bool;

    /// Return true if the number is not zero; false otherwise.
    #[inline]
    fn is_non_zero(&self) -> bool {
        !self.is_zero()
    }
}

/// Describes basic checked arithmetic shared by integers and decimals.
pub trait Number: Sized + Copy {
    fn checked_add(self, other: Self) -> crate::MathResult<Self>;

    fn checked_sub(self, other: Self) -> crate::MathResult<Self>;

    fn checked_mul(self, other: Self) -> crate::MathResult<Self>;

    fn checked_div(self, other: Self) -> crate::MathResult<Self>;
}
