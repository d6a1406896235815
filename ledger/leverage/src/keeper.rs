use crate::{DecodePolicies, LedgerConfig, StaticRegistry};

/// Entry point to the ledger.
///
/// The keeper holds no state of its own: every operation takes the store of
/// the current state transition as an argument, and reads or writes only
/// through it. Operations don't lock; the host must run transitions one at a
/// time.
///
/// `R` is the host's registry of accepted assets, see
/// [`TokenRegistry`](crate::TokenRegistry).
#[derive(Debug, Clone)]
pub struct Keeper<R> {
    pub(crate) decode: DecodePolicies,
    pub(crate) registry: R,
}

impl<R> Keeper<R> {
    pub fn new(decode: DecodePolicies, registry: R) -> Self {
        Self { decode, registry }
    }

    pub fn decode_policies(&self) -> &DecodePolicies {
        &self.decode
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }
}

impl Keeper<StaticRegistry> {
    pub fn from_config(config: LedgerConfig) -> Self {
        Self {
            decode: config.decode,
            registry: StaticRegistry::new(config.accepted_tokens),
        }
    }
}
