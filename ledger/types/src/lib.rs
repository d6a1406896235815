mod address;
mod coin;
mod db;
mod denom;
mod error;
mod mock;
mod storage;

pub use {address::*, coin::*, db::*, denom::*, error::*, mock::*, storage::*};

// Re-export the math crate, so that users don't need to add it as a separate
// dependency.
pub use ledger_math::*;
