use {
    crate::{IsZero, MathError, MathResult, Number, NumberConst, Uint256},
    bnum::types::U256,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Display, Write},
        str::FromStr,
    },
};

/// An unsigned [fixed-point decimal](https://en.wikipedia.org/wiki/Fixed-point_arithmetic)
/// number with 18 decimal places, backed by a [`Uint256`].
///
/// The inner integer is the decimal multiplied by `10^18`, e.g. `1.05` is
/// stored as `1_050_000_000_000_000_000`. Borsh encodes the inner integer
/// only, so the stored bytes are identical to those of a `Uint256`.
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
pub struct Udec256(Uint256);

impl Udec256 {
    pub const DECIMAL_PLACES: u32 = 18;
    /// Ratio between the inner integer value and the decimal value it represents.
    pub const PRECISION: Uint256 = Uint256::new(10_u128.pow(Self::DECIMAL_PLACES));

    /// Create a new decimal _without_ adding decimal places.
    ///
    /// ```rust
    /// use {
    ///     ledger_math::{Udec256, Uint256},
    ///     std::str::FromStr,
    /// };
    ///
    /// let decimal = Udec256::raw(Uint256::new(100));
    /// assert_eq!(decimal, Udec256::from_str("0.0000000000000001").unwrap());
    /// ```
    pub const fn raw(value: Uint256) -> Self {
        Self(value)
    }

    /// Create a new decimal from a whole number.
    pub fn new(value: u128) -> Self {
        Self::scaled(value, Self::PRECISION.0)
    }

    pub fn new_percent(value: u128) -> Self {
        Self::scaled(value, Self::PRECISION.0 / U256::from(100_u128))
    }

    pub fn new_permille(value: u128) -> Self {
        Self::scaled(value, Self::PRECISION.0 / U256::from(1000_u128))
    }

    // A `u128` times at most `10^18` stays far below `U256::MAX`.
    fn scaled(value: u128, factor: U256) -> Self {
        Self(Uint256(U256::from(value) * factor))
    }

    pub const fn numerator(&self) -> Uint256 {
        self.0
    }

    /// Convert an integer amount to a decimal with the same value.
    pub fn checked_from_int(value: Uint256) -> MathResult<Self> {
        value.checked_mul(Self::PRECISION).map(Self)
    }

    /// Divide, rounding up to the nearest representable decimal.
    pub fn checked_div_ceil(self, other: Self) -> MathResult<Self> {
        if other.is_zero() {
            return Err(MathError::division_by_zero(self));
        }

        self.0
            .checked_multiply_ratio_ceil(Self::PRECISION, other.0)
            .map(Self)
    }

    /// Truncate the fractional part, returning the integer.
    pub fn into_int(self) -> Uint256 {
        Uint256(self.0 .0 / Self::PRECISION.0)
    }

    /// Round up to the nearest integer.
    pub fn into_int_ceil(self) -> Uint256 {
        let whole = self.0 .0 / Self::PRECISION.0;
        if (self.0 .0 % Self::PRECISION.0).is_zero() {
            Uint256(whole)
        } else {
            // `whole` is at most `U256::MAX / 10^18`, so this can't overflow.
            Uint256(whole + U256::ONE)
        }
    }
}

impl NumberConst for Udec256 {
    const MAX: Self = Self(Uint256::MAX);
    const MIN: Self = Self(Uint256::MIN);
    const ONE: Self = Self(Self::PRECISION);
    const ZERO: Self = Self(Uint256::ZERO);
}

impl IsZero for Udec256 {
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Number for Udec256 {
    fn checked_add(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .map_err(|_| MathError::overflow(self, "+", other))
    }

    fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .map_err(|_| MathError::overflow(self, "-", other))
    }

    /// Rounds down to the nearest representable decimal.
    fn checked_mul(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_multiply_ratio_floor(other.0, Self::PRECISION)
            .map(Self)
            .map_err(|_| MathError::overflow(self, "*", other))
    }

    /// Rounds down to the nearest representable decimal.
    fn checked_div(self, other: Self) -> MathResult<Self> {
        if other.is_zero() {
            return Err(MathError::division_by_zero(self));
        }

        self.0
            .checked_multiply_ratio_floor(Self::PRECISION, other.0)
            .map(Self)
    }
}

impl Display for Udec256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 .0 / Self::PRECISION.0;
        let fractional = self.0 .0 % Self::PRECISION.0;

        if fractional.is_zero() {
            write!(f, "{whole}")
        } else {
            let fractional_string = format!(
                "{:0>padding$}",
                fractional.to_string(),
                padding = Self::DECIMAL_PLACES as usize
            );
            write!(f, "{whole}")?;
            f.write_char('.')?;
            f.write_str(fractional_string.trim_end_matches('0'))
        }
    }
}

impl FromStr for Udec256 {
    type Err = MathError;

    /// Converts the decimal string to a `Udec256`.
    ///
    /// Possible inputs: "1.23", "1", "000012", "1.123000000"
    /// Disallowed: "", ".23", "-1"
    ///
    /// This never performs any kind of rounding. More than `DECIMAL_PLACES`
    /// fractional digits, even zeros, result in an error.
    fn from_str(input: &str) -> MathResult<Self> {
        let mut parts_iter = input.split('.');

        let whole_part = parts_iter.next().unwrap_or_default();
        let whole = Uint256::from_str(whole_part)
            .map_err(|_| MathError::parse_number::<Self, _, _>(input, "error parsing whole"))?;

        let mut atomics = whole
            .checked_mul(Self::PRECISION)
            .map_err(|_| MathError::parse_number::<Self, _, _>(input, "value too big"))?;

        if let Some(fractional_part) = parts_iter.next() {
            if fractional_part.is_empty() || !fractional_part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MathError::parse_number::<Self, _, _>(
                    input,
                    "error parsing fractional",
                ));
            }

            let exp = Self::DECIMAL_PLACES
                .checked_sub(fractional_part.len() as u32)
                .ok_or_else(|| {
                    MathError::parse_number::<Self, _, _>(
                        input,
                        format!(
                            "cannot parse more than {} fractional digits",
                            Self::DECIMAL_PLACES
                        ),
                    )
                })?;

            let fractional = fractional_part.parse::<u128>().map_err(|_| {
                MathError::parse_number::<Self, _, _>(input, "error parsing fractional")
            })?;

            // Can't overflow: fractional < 10^18 and the factor is at most 10^18.
            let fractional = Uint256::new(fractional * 10_u128.pow(exp));

            atomics = atomics
                .checked_add(fractional)
                .map_err(|_| MathError::parse_number::<Self, _, _>(input, "value too big"))?;
        }

        if parts_iter.next().is_some() {
            return Err(MathError::parse_number::<Self, _, _>(
                input,
                "unexpected number of dots",
            ));
        }

        Ok(Self(atomics))
    }
}

impl ser::Serialize for Udec256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Udec256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        Udec256::from_str(&s).map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*, test_case::test_case};

    #[test_case("1", Udec256::ONE; "one")]
    #[test_case("1.05", Udec256::new_percent(105); "percent")]
    #[test_case("52.5", Udec256::new_permille(52500); "half")]
    #[test_case("0.000000000000000001", Udec256::raw(Uint256::ONE); "tick")]
    #[test_case("000012", Udec256::new(12); "leading zeros")]
    #[test_case("1.500000", Udec256::new_permille(1500); "trailing zeros")]
    #[test_case("1000000000000000000000", Udec256::new(10_u128.pow(21)); "beyond 128 bits")]
    fn parsing_works(input: &str, expect: Udec256) {
        assert_eq!(Udec256::from_str(input).unwrap(), expect);
    }

    #[test_case(""; "empty")]
    #[test_case(".23"; "no whole")]
    #[test_case("-1"; "negative")]
    #[test_case("-0.5"; "negative fraction")]
    #[test_case("+1"; "plus sign")]
    #[test_case("1."; "dangling dot")]
    #[test_case("1.2.3"; "two dots")]
    #[test_case("1.0000000000000000001"; "too many fractional digits")]
    #[test_case("1.-5"; "negative fractional")]
    fn parsing_fails(input: &str) {
        assert!(matches!(
            Udec256::from_str(input),
            Err(MathError::ParseNumber { .. })
        ));
    }

    #[test_case(Udec256::ONE, "1")]
    #[test_case(Udec256::new_percent(105), "1.05")]
    #[test_case(Udec256::raw(Uint256::ONE), "0.000000000000000001")]
    #[test_case(Udec256::ZERO, "0")]
    fn display_works(value: Udec256, expect: &str) {
        assert_eq!(value.to_string(), expect);
    }

    #[test]
    fn multiplication_and_division() {
        let fifty = Udec256::new(50);
        let scalar = Udec256::new_percent(105);
        let real = fifty.checked_mul(scalar).unwrap();
        assert_eq!(real, Udec256::from_str("52.5").unwrap());
        assert_eq!(real.checked_div(scalar).unwrap(), fifty);
        assert!(matches!(
            real.checked_div(Udec256::ZERO),
            Err(MathError::DivisionByZero { .. })
        ));
        assert!(matches!(
            Udec256::MAX.checked_mul(Udec256::new(2)),
            Err(MathError::Overflow { op: "*", .. })
        ));
    }

    #[test_case(100, 3, "33.333333333333333333", "33.333333333333333334"; "inexact")]
    #[test_case(105, 1, "105", "105"; "exact")]
    fn division_rounding(value: u128, by: u128, floor: &str, ceil: &str) {
        let value = Udec256::new(value);
        let by = Udec256::new(by);
        assert_eq!(value.checked_div(by).unwrap().to_string(), floor);
        assert_eq!(value.checked_div_ceil(by).unwrap().to_string(), ceil);
        assert!(matches!(
            value.checked_div_ceil(Udec256::ZERO),
            Err(MathError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn rounding_to_int() {
        let value = Udec256::from_str("52.5").unwrap();
        assert_eq!(value.into_int(), Uint256::new(52));
        assert_eq!(value.into_int_ceil(), Uint256::new(53));
        assert_eq!(Udec256::new(7).into_int_ceil(), Uint256::new(7));
        assert_eq!(
            Udec256::MAX.into_int_ceil(),
            Udec256::MAX.into_int().checked_add(Uint256::ONE).unwrap()
        );
    }

    #[test]
    fn shares_encoding_with_uint() {
        let dec = Udec256::raw(Uint256::new(12345));
        let bytes = borsh::to_vec(&dec).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes, borsh::to_vec(&Uint256::new(12345)).unwrap());
    }

    proptest! {
        #[test]
        fn display_then_parse_is_identity(digits in any::<[u64; 4]>()) {
            let dec = Udec256::raw(Uint256::from_inner(U256::from_digits(digits)));
            prop_assert_eq!(Udec256::from_str(&dec.to_string()).unwrap(), dec);
        }
    }
}
