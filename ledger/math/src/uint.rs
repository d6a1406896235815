use {
    crate::{IsZero, MathError, MathResult, Number, NumberConst},
    bnum::{
        cast::As,
        types::{U256, U512},
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// An unsigned 256-bit integer amount.
///
/// Borsh-encodes to exactly 32 bytes, little endian. [`Udec256`](crate::Udec256)
/// wraps this type, so integers and decimals share one byte format in storage.
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct Uint256(pub(crate) U256);

impl Uint256 {
    pub const fn new(value: u128) -> Self {
        Self(U256::from_digits([value as u64, (value >> 64) as u64, 0, 0]))
    }

    pub const fn from_inner(value: U256) -> Self {
        Self(value)
    }

    pub const fn number(self) -> U256 {
        self.0
    }

    /// Compute `self * numerator / denominator`, rounding down. The product
    /// is computed in 512 bits so it can't overflow before the division.
    pub fn checked_multiply_ratio_floor(
        self,
        numerator: impl Into<Self>,
        denominator: impl Into<Self>,
    ) -> MathResult<Self> {
        let (quotient, _) = self.full_mul_div(numerator.into(), denominator.into())?;
        Ok(quotient)
    }

    /// Compute `self * numerator / denominator`, rounding up.
    pub fn checked_multiply_ratio_ceil(
        self,
        numerator: impl Into<Self>,
        denominator: impl Into<Self>,
    ) -> MathResult<Self> {
        let (quotient, has_remainder) = self.full_mul_div(numerator.into(), denominator.into())?;
        if has_remainder {
            quotient.checked_add(Self::ONE)
        } else {
            Ok(quotient)
        }
    }

    fn full_mul_div(self, numerator: Self, denominator: Self) -> MathResult<(Self, bool)> {
        if denominator.is_zero() {
            return Err(MathError::division_by_zero(self));
        }

        let product = self.0.as_::<U512>() * numerator.0.as_::<U512>();
        let denominator_512 = denominator.0.as_::<U512>();
        let quotient = product / denominator_512;
        let has_remainder = !(product % denominator_512).is_zero();

        narrow(quotient)
            .map(|quotient| (Self(quotient), has_remainder))
            .ok_or_else(|| MathError::overflow_conversion::<Self, _>(quotient))
    }
}

fn narrow(value: U512) -> Option<U256> {
    let digits = value.digits();
    if digits[4..].iter().any(|digit| *digit != 0) {
        return None;
    }

    Some(U256::from_digits([digits[0], digits[1], digits[2], digits[3]]))
}

impl NumberConst for Uint256 {
    const MAX: Self = Self(U256::MAX);
    const MIN: Self = Self(U256::MIN);
    const ONE: Self = Self(U256::ONE);
    const ZERO: Self = Self(U256::ZERO);
}

impl IsZero for Uint256 {
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Number for Uint256 {
    fn checked_add(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow(self, "+", other))
    }

    fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow(self, "-", other))
    }

    fn checked_mul(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_mul(other.0)
            .map(Self)
            .ok_or_else(|| MathError::overflow(self, "*", other))
    }

    fn checked_div(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_div(other.0)
            .map(Self)
            .ok_or_else(|| MathError::division_by_zero(self))
    }
}

impl From<u128> for Uint256 {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        Self::new(value.into())
    }
}

impl From<U256> for Uint256 {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Uint256 {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MathError::parse_number::<Self, _, _>(s, "not a decimal integer"));
        }

        U256::from_str(s)
            .map(Self)
            .map_err(|err| MathError::parse_number::<Self, _, _>(s, err))
    }
}

impl ser::Serialize for Uint256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Uint256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        Uint256::from_str(&s).map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------
