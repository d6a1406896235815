use {
    crate::{StdError, StdResult},
    serde::{de, ser},
    std::{
        fmt::{self, Display, Formatter},
        ops::Deref,
        str::FromStr,
    },
};

// ----------------------------------- part ------------------------------------

/// One `/`-separated segment of a denom: a non-empty ASCII alphanumeric
/// string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Part(String);

impl Part {
    pub fn new_unchecked<T>(s: T) -> Self
    where
        T: Into<String>,
    {
        Self(s.into())
    }
}

impl Deref for Part {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Part {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        if s.is_empty() {
            return Err(StdError::invalid_denom(s, "empty part"));
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(StdError::invalid_denom(s, "non-alphanumeric character"));
        }

        Ok(Self(s.to_owned()))
    }
}

// ----------------------------------- denom -----------------------------------

/// Identifier of an asset, e.g. `uumee`, or `u/uatom` for the uToken of
/// `uatom`.
///
/// At most [`Denom::MAX_LEN`] characters long, made of one or more
/// [`Part`]s joined by `/`. A `Denom` can only be obtained through parsing,
/// so holding one means it's valid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Denom(Vec<Part>);

impl Denom {
    pub const MAX_LEN: usize = 128;

    /// Return a new denom with the parts put in front.
    ///
    /// Fails if the result is too long.
    pub fn prepend(&self, parts: &[&Part]) -> StdResult<Denom> {
        let joined = parts
            .iter()
            .map(|part| &part[..])
            .chain(self.0.iter().map(|part| &part[..]))
            .collect::<Vec<&str>>()
            .join("/");

        joined.parse()
    }

    /// Return the rest of the denom after the given leading parts, or `None`
    /// if it doesn't start with them or nothing would remain.
    pub fn strip(&self, parts: &[&Part]) -> Option<Denom> {
        if self.0.len() <= parts.len() {
            return None;
        }

        let (head, rest) = self.0.split_at(parts.len());
        head.iter()
            .zip(parts)
            .all(|(a, b)| a == *b)
            .then(|| Denom(rest.to_vec()))
    }
}

impl Display for Denom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(part)?;
        }
        Ok(())
    }
}

impl FromStr for Denom {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        if s.is_empty() || s.len() > Self::MAX_LEN {
            return Err(StdError::invalid_denom(s, "too short or too long"));
        }

        s.split('/')
            .map(Part::from_str)
            .collect::<StdResult<_>>()
            .map(Self)
    }
}

impl TryFrom<&str> for Denom {
    type Error = StdError;

    fn try_from(s: &str) -> StdResult<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Denom {
    type Error = StdError;

    fn try_from(s: String) -> StdResult<Self> {
        s.parse()
    }
}

impl ser::Serialize for Denom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> de::Deserialize<'de> for Denom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case("uumee"; "single part")]
    #[test_case("u/uatom"; "utoken")]
    #[test_case("gamm/pool/1234"; "three parts")]
    fn valid_denoms(s: &str) {
        assert_eq!(Denom::from_str(s).unwrap().to_string(), s);
    }

    #[test_case(""; "empty")]
    #[test_case("u//uatom"; "empty part")]
    #[test_case("u/&/uatom"; "non alphanumeric")]
    #[test_case("/uatom"; "leading slash")]
    #[test_case("uatom/"; "trailing slash")]
    #[test_case("ü"; "non ascii")]
    fn invalid_denoms(s: &str) {
        assert!(matches!(
            Denom::from_str(s),
            Err(StdError::InvalidDenom { .. })
        ));
    }

    #[test]
    fn length_limit() {
        let s = "a".repeat(Denom::MAX_LEN + 1);
        assert!(Denom::from_str(&s).is_err());
        assert!(Denom::from_str(&s[1..]).is_ok());
    }

    #[test]
    fn prepend_and_strip() {
        let base = Denom::from_str("uatom").unwrap();
        let u = Part::new_unchecked("u");

        let utoken = base.prepend(&[&u]).unwrap();
        assert_eq!(utoken.to_string(), "u/uatom");

        assert_eq!(utoken.strip(&[&u]), Some(base.clone()));
        assert_eq!(base.strip(&[&u]), None);
        assert_eq!(Denom::from_str("u").unwrap().strip(&[&u]), None);
    }

    #[test]
    fn json_is_the_string_form() {
        let denom = Denom::from_str("u/uatom").unwrap();
        let json = serde_json::to_string(&denom).unwrap();
        assert_eq!(json, r#""u/uatom""#);
        assert_eq!(serde_json::from_str::<Denom>(&json).unwrap(), denom);
        assert!(serde_json::from_str::<Denom>(r#""u//x""#).is_err());
    }
}
