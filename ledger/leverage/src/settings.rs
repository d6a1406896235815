use {
    crate::LeverageResult,
    config::{Config, Environment, File},
    ledger_types::{Denom, StdResult},
    serde::Deserialize,
    std::{collections::BTreeSet, path::PathBuf},
};

/// What to do when a record exists in storage but can't be decoded.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Treat the record as corrupted state and panic, aborting the transition.
    Abort,
    /// Treat the record as absent, i.e. read its default value.
    Tolerate,
}

impl DecodePolicy {
    /// Apply the policy to the result of loading a record.
    ///
    /// Returns `None` if the record is absent, or undecodable under
    /// `Tolerate`.
    pub(crate) fn resolve<T>(
        self,
        kind: &'static str,
        denom: &Denom,
        loaded: StdResult<Option<T>>,
    ) -> Option<T> {
        match (self, loaded) {
            (_, Ok(maybe_data)) => maybe_data,
            (DecodePolicy::Abort, Err(err)) => {
                panic!("corrupted {kind} record for denom `{denom}`: {err}")
            },
            (DecodePolicy::Tolerate, Err(_err)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    kind,
                    denom = denom.to_string(),
                    err = _err.to_string(),
                    "Ignoring undecodable record"
                );

                None
            },
        }
    }
}

/// Decode policy of each read path.
///
/// The defaults keep the behavior the ledger has always had: the borrow read
/// path falls back to zero, while the interest scalar and uToken supply read
/// paths abort.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DecodePolicies {
    pub borrow: DecodePolicy,
    pub interest_scalar: DecodePolicy,
    pub utoken_supply: DecodePolicy,
}

impl Default for DecodePolicies {
    fn default() -> Self {
        Self {
            borrow: DecodePolicy::Tolerate,
            interest_scalar: DecodePolicy::Abort,
            utoken_supply: DecodePolicy::Abort,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LedgerConfig {
    pub decode: DecodePolicies,
    /// Base denoms accepted by the built-in [`StaticRegistry`](crate::StaticRegistry).
    /// Hosts with their own token registry can leave this empty.
    pub accepted_tokens: BTreeSet<Denom>,
}

impl LedgerConfig {
    /// Load the config from a file, with values overridable by environment
    /// variables such as `LEDGER__DECODE__BORROW=abort`.
    pub fn parse<P>(path: P) -> LeverageResult<Self>
    where
        P: Into<PathBuf>,
    {
        let env_override = Environment::with_prefix("LEDGER")
            .prefix_separator("__")
            .separator("__");

        let config = Config::builder()
            .add_source(File::from(path.into()))
            .add_source(env_override)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

// ----------------------------------- tests -----------------------------------
