use {
    crate::{COLLATERAL_SETTINGS, CollateralSetting, Keeper, LeverageError, LeverageResult},
    ledger_types::{Addr, Denom, Order, Storage},
};

impl<R> Keeper<R> {
    /// Enable or disable a denom as collateral for an account.
    ///
    /// Enabling writes a presence marker; disabling deletes it. Disabling a
    /// denom that was never enabled is a no-op.
    pub fn set_collateral_setting(
        &self,
        storage: &mut dyn Storage,
        address: &Addr,
        denom: &Denom,
        enable: bool,
    ) -> LeverageResult<()> {
        if address.is_empty() {
            return Err(LeverageError::EmptyAddress);
        }

        if enable {
            COLLATERAL_SETTINGS.insert(storage, (address, denom));
        } else {
            COLLATERAL_SETTINGS.remove(storage, (address, denom));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            address = address.to_string(),
            denom = denom.to_string(),
            enable,
            "Set collateral setting"
        );

        Ok(())
    }

    pub fn get_collateral_setting(
        &self,
        storage: &dyn Storage,
        address: &Addr,
        denom: &Denom,
    ) -> bool {
        COLLATERAL_SETTINGS.has(storage, (address, denom))
    }

    /// Return the denoms an account has enabled as collateral, in ascending
    /// order.
    pub fn get_borrower_collateral_denoms(
        &self,
        storage: &dyn Storage,
        address: &Addr,
    ) -> LeverageResult<Vec<Denom>> {
        Ok(COLLATERAL_SETTINGS
            .prefix(address)
            .keys(storage, Order::Ascending)
            .collect::<Result<_, _>>()?)
    }

    pub fn get_all_collateral_settings(
        &self,
        storage: &dyn Storage,
    ) -> LeverageResult<Vec<CollateralSetting>> {
        COLLATERAL_SETTINGS
            .range(storage, Order::Ascending)
            .map(|res| -> LeverageResult<_> {
                let (address, denom) = res?;

                Ok(CollateralSetting { address, denom })
            })
            .collect()
    }
}

// ----------------------------------- tests -----------------------------------
