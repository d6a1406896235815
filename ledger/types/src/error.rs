use {ledger_math::MathError, std::any::type_name};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StdError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("invalid denom `{denom}`: {reason}")]
    InvalidDenom { denom: String, reason: &'static str },

    #[error("invalid address `{address}`: {reason}")]
    InvalidAddress {
        address: String,
        reason: &'static str,
    },

    /// A value couldn't be encoded, or a stored record couldn't be decoded.
    #[error("{codec} codec failed on {ty}: {reason}")]
    Codec {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },
}

impl StdError {
    pub fn invalid_denom<D>(denom: D, reason: &'static str) -> Self
    where
        D: ToString,
    {
        Self::InvalidDenom {
            denom: denom.to_string(),
            reason,
        }
    }

    pub fn invalid_address<A>(address: A, reason: &'static str) -> Self
    where
        A: ToString,
    {
        Self::InvalidAddress {
            address: address.to_string(),
            reason,
        }
    }

    pub fn codec<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Codec {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

pub type StdResult<T> = core::result::Result<T, StdError>;
