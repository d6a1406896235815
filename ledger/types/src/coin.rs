use {
    crate::{Denom, StdError, StdResult},
    ledger_math::{Udec256, Uint256},
    serde::{Deserialize, Serialize},
    std::fmt::{self, Display},
};

/// An integer amount of a single denomination.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub denom: Denom,
    pub amount: Uint256,
}

impl Coin {
    pub fn new<D, A>(denom: D, amount: A) -> StdResult<Self>
    where
        D: TryInto<Denom>,
        A: Into<Uint256>,
        StdError: From<D::Error>,
    {
        Ok(Self {
            denom: denom.try_into()?,
            amount: amount.into(),
        })
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Like `Coin` but the amount is a decimal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DecCoin {
    pub denom: Denom,
    pub amount: Udec256,
}

impl DecCoin {
    pub fn new<D>(denom: D, amount: Udec256) -> StdResult<Self>
    where
        D: TryInto<Denom>,
        StdError: From<D::Error>,
    {
        Ok(Self {
            denom: denom.try_into()?,
            amount,
        })
    }
}

impl Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl From<(Denom, Udec256)> for DecCoin {
    fn from((denom, amount): (Denom, Udec256)) -> Self {
        Self { denom, amount }
    }
}

impl From<(Denom, Uint256)> for Coin {
    fn from((denom, amount): (Denom, Uint256)) -> Self {
        Self { denom, amount }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, std::str::FromStr};

    #[test]
    fn constructing_coins() {
        let coin = Coin::new("u/uatom", 200_u128).unwrap();
        assert_eq!(coin.to_string(), "200u/uatom");

        let dec_coin = DecCoin::new("uatom", Udec256::from_str("52.5").unwrap()).unwrap();
        assert_eq!(dec_coin.to_string(), "52.5uatom");

        assert!(matches!(
            Coin::new("u//uatom", 1_u128),
            Err(StdError::InvalidDenom { .. })
        ));
    }
}
