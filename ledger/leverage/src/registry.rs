use {
    ledger_types::{Denom, Part, StdResult, Storage},
    std::collections::BTreeSet,
};

/// Namespace of uToken denoms: the uToken of `uatom` is `u/uatom`.
pub const UTOKEN_NAMESPACE: &str = "u";

/// Return the uToken denom of a base denom.
///
/// Fails if the result would exceed the maximum denom length.
pub fn utoken_denom(base: &Denom) -> StdResult<Denom> {
    base.prepend(&[&Part::new_unchecked(UTOKEN_NAMESPACE)])
}

/// Return the base denom of a uToken denom, or `None` if the denom isn't in
/// the uToken namespace.
pub fn base_denom(utoken: &Denom) -> Option<Denom> {
    utoken.strip(&[&Part::new_unchecked(UTOKEN_NAMESPACE)])
}

/// The host's registry of accepted assets.
///
/// The ledger only consults it to gate uToken supply updates.
pub trait TokenRegistry {
    /// Whether the base denom is accepted by the protocol.
    fn is_accepted_token(&self, storage: &dyn Storage, denom: &Denom) -> bool;

    /// Whether the denom is the uToken of an accepted base denom.
    fn is_accepted_utoken(&self, storage: &dyn Storage, denom: &Denom) -> bool {
        base_denom(denom).is_some_and(|base| self.is_accepted_token(storage, &base))
    }
}

/// A registry with a fixed set of accepted base denoms, typically loaded from
/// [`LedgerConfig`](crate::LedgerConfig).
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    accepted: BTreeSet<Denom>,
}

impl StaticRegistry {
    pub fn new<I>(accepted: I) -> Self
    where
        I: IntoIterator<Item = Denom>,
    {
        Self {
            accepted: accepted.into_iter().collect(),
        }
    }
}

impl TokenRegistry for StaticRegistry {
    fn is_accepted_token(&self, _storage: &dyn Storage, denom: &Denom) -> bool {
        self.accepted.contains(denom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        ledger_types::MockStorage,
        std::str::FromStr,
        test_case::test_case,
    };

    fn denom(s: &str) -> Denom {
        Denom::from_str(s).unwrap()
    }

    #[test]
    fn utoken_conversion() {
        assert_eq!(utoken_denom(&denom("uatom")).unwrap(), denom("u/uatom"));
        assert_eq!(base_denom(&denom("u/uatom")), Some(denom("uatom")));
        assert_eq!(base_denom(&denom("uatom")), None);
        assert_eq!(base_denom(&denom("ibc/u/uatom")), None);
        assert!(utoken_denom(&Denom::from_str(&"a".repeat(128)).unwrap()).is_err());
    }

    #[test_case("u/x", true; "accepted utoken")]
    #[test_case("x", false; "base denom itself")]
    #[test_case("u/y", false; "utoken of unknown base")]
    #[test_case("y", false; "unknown base")]
    #[test_case("u/u/x", false; "nested utoken")]
    fn static_registry(s: &str, accepted: bool) {
        let registry = StaticRegistry::new([denom("x")]);
        assert_eq!(
            registry.is_accepted_utoken(&MockStorage::new(), &denom(s)),
            accepted
        );
    }
}
