use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    data_encoding::HEXLOWER,
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// An account address.
///
/// Unlike contract addresses in some chains, account addresses here are of
/// variable length, matching what the host hands over. An empty address can
/// be constructed but is rejected by every ledger operation that writes state.
///
/// Addresses are displayed and serialized as lowercase hex strings with the
/// `0x` prefix.
#[derive(
    BorshSerialize, BorshDeserialize, Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Addr(Vec<u8>);

impl Addr {
    /// Length of the addresses generated by [`Addr::mock`].
    pub const MOCK_LENGTH: usize = 20;

    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Generate a mock address for use in testing.
    pub fn mock(index: u8) -> Self {
        let mut bytes = vec![0; Self::MOCK_LENGTH];
        bytes[Self::MOCK_LENGTH - 1] = index;
        Self(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<[u8]> for Addr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Addr {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", HEXLOWER.encode(&self.0))
    }
}

impl FromStr for Addr {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let Some(hex) = s.strip_prefix("0x") else {
            return Err(StdError::invalid_address(s, "missing `0x` prefix"));
        };

        HEXLOWER
            .decode(hex.as_bytes())
            .map(Self)
            .map_err(|_| StdError::invalid_address(s, "not lowercase hex"))
    }
}

impl ser::Serialize for Addr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Addr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        Addr::from_str(&s).map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test]
    fn mock_addresses_are_distinct_and_non_empty() {
        assert_ne!(Addr::mock(1), Addr::mock(2));
        assert!(!Addr::mock(1).is_empty());
        assert!(Addr::default().is_empty());
    }

    #[test_case(Addr::mock(255), "0x00000000000000000000000000000000000000ff"; "mock")]
    #[test_case(Addr::default(), "0x"; "empty")]
    fn display_and_parse(addr: Addr, expect: &str) {
        assert_eq!(addr.to_string(), expect);
        assert_eq!(Addr::from_str(expect).unwrap(), addr);
    }

    #[test_case("00ff"; "no prefix")]
    #[test_case("0xABCD"; "uppercase")]
    #[test_case("0xabc"; "odd length")]
    fn parse_rejects(input: &str) {
        assert!(matches!(
            Addr::from_str(input),
            Err(StdError::InvalidAddress { .. })
        ));
    }
}
