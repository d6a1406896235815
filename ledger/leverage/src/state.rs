use {
    ledger_storage::{Map, Set},
    ledger_types::{Addr, Denom, Udec256, Uint256},
};

/// Adjusted amount borrowed by each account, per denom. A zero amount is never
/// stored; the key is deleted instead.
pub const ADJUSTED_BORROWS: Map<(&Addr, &Denom), Udec256> = Map::new("adjusted_borrow");

/// Sum of all adjusted borrows of a denom.
pub const ADJUSTED_TOTAL_BORROWS: Map<&Denom, Udec256> = Map::new("total_adjusted_borrow");

/// Cumulative interest multiplier of each base denom. Absent means 1.
pub const INTEREST_SCALARS: Map<&Denom, Udec256> = Map::new("interest_scalar");

/// Accounts that have enabled a denom as collateral.
pub const COLLATERAL_SETTINGS: Set<(&Addr, &Denom)> = Set::new("collateral_setting");

/// Total supply of each uToken. Zero is stored explicitly once minted.
pub const UTOKEN_SUPPLY: Map<&Denom, Uint256> = Map::new("utoken_supply");
