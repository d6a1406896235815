use ledger_types::{Denom, MathError, StdError, Udec256};

#[derive(Debug, thiserror::Error)]
pub enum LeverageError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("empty address")]
    EmptyAddress,

    #[error("invalid interest scalar `{scalar}` for denom `{denom}`: must be at least 1")]
    InvalidInterestScalar { denom: Denom, scalar: Udec256 },

    #[error("invalid asset `{coin}`: not an accepted uToken")]
    InvalidAsset { coin: String },
}

pub type LeverageResult<T> = std::result::Result<T, LeverageError>;
