use {
    crate::{Keeper, LeverageResult, TokenRegistry},
    ledger_types::{Addr, Coin, DecCoin, Denom, Storage, Udec256},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdjustedBorrow {
    pub address: Addr,
    pub amount: DecCoin,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CollateralSetting {
    pub address: Addr,
    pub denom: Denom,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InterestScalar {
    pub denom: Denom,
    pub scalar: Udec256,
}

/// Full content of the ledger, for importing at chain start and exporting
/// for upgrades.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GenesisState {
    pub adjusted_borrows: Vec<AdjustedBorrow>,
    pub collateral_settings: Vec<CollateralSetting>,
    pub interest_scalars: Vec<InterestScalar>,
    pub utoken_supply: Vec<Coin>,
}

impl<R> Keeper<R>
where
    R: TokenRegistry,
{
    /// Write a genesis state into an empty store.
    ///
    /// Every entry goes through the regular setter, so it's validated the same
    /// way and borrow totals are derived rather than imported. The first
    /// invalid entry aborts the import; the host is expected to discard the
    /// partially written store.
    pub fn init_genesis(
        &self,
        storage: &mut dyn Storage,
        genesis: &GenesisState,
    ) -> LeverageResult<()> {
        for InterestScalar { denom, scalar } in &genesis.interest_scalars {
            self.set_interest_scalar(storage, denom, *scalar)?;
        }

        for AdjustedBorrow { address, amount } in &genesis.adjusted_borrows {
            self.set_adjusted_borrow(storage, address, amount)?;
        }

        for CollateralSetting { address, denom } in &genesis.collateral_settings {
            self.set_collateral_setting(storage, address, denom, true)?;
        }

        for supply in &genesis.utoken_supply {
            self.set_utoken_supply(storage, supply)?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            adjusted_borrows = genesis.adjusted_borrows.len(),
            collateral_settings = genesis.collateral_settings.len(),
            interest_scalars = genesis.interest_scalars.len(),
            utoken_supply = genesis.utoken_supply.len(),
            "Initialized ledger from genesis"
        );

        Ok(())
    }
}

impl<R> Keeper<R> {
    pub fn export_genesis(&self, storage: &dyn Storage) -> LeverageResult<GenesisState> {
        Ok(GenesisState {
            adjusted_borrows: self.get_all_adjusted_borrows(storage)?,
            collateral_settings: self.get_all_collateral_settings(storage)?,
            interest_scalars: self.get_all_interest_scalars(storage)?,
            utoken_supply: self.get_all_utoken_supply(storage)?,
        })
    }
}
