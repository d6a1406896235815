use {
    crate::{Keeper, LeverageError, LeverageResult, TokenRegistry, UTOKEN_SUPPLY},
    ledger_types::{Coin, Denom, NumberConst, Order, Storage, Uint256},
};

impl<R> Keeper<R> {
    /// Return the circulating supply of a uToken, which is zero if none has
    /// ever been minted.
    ///
    /// ## Panics
    ///
    /// If the stored supply can't be decoded and the uToken supply decode
    /// policy is `Abort` (the default).
    pub fn get_utoken_supply(&self, storage: &dyn Storage, denom: &Denom) -> Coin {
        let loaded = UTOKEN_SUPPLY.may_load(storage, denom);
        let amount = self
            .decode
            .utoken_supply
            .resolve("uToken supply", denom, loaded)
            .unwrap_or(Uint256::ZERO);

        Coin {
            denom: denom.clone(),
            amount,
        }
    }

    /// Return the supply of every uToken that has a record, including those
    /// fully burned back to zero.
    pub fn get_all_utoken_supply(&self, storage: &dyn Storage) -> LeverageResult<Vec<Coin>> {
        UTOKEN_SUPPLY
            .range(storage, Order::Ascending)
            .map(|res| -> LeverageResult<_> { Ok(Coin::from(res?)) })
            .collect()
    }
}

impl<R> Keeper<R>
where
    R: TokenRegistry,
{
    /// Set the circulating supply of a uToken.
    ///
    /// Fails with [`LeverageError::InvalidAsset`] if the denom isn't the uToken
    /// of an accepted token. Zero is stored as is rather than deleted.
    pub fn set_utoken_supply(
        &self,
        storage: &mut dyn Storage,
        supply: &Coin,
    ) -> LeverageResult<()> {
        if !self.registry.is_accepted_utoken(storage, &supply.denom) {
            return Err(LeverageError::InvalidAsset {
                coin: supply.to_string(),
            });
        }

        UTOKEN_SUPPLY.save(storage, &supply.denom, &supply.amount)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(supply = supply.to_string(), "Set uToken supply");

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{DecodePolicies, DecodePolicy, StaticRegistry},
        ledger_types::MockStorage,
        std::str::FromStr,
        test_case::test_case,
    };

    fn keeper() -> Keeper<StaticRegistry> {
        Keeper::new(
            DecodePolicies::default(),
            StaticRegistry::new([denom("x"), denom("uumee")]),
        )
    }

    fn denom(s: &str) -> Denom {
        Denom::from_str(s).unwrap()
    }

    fn coin(d: &str, amount: u128) -> Coin {
        Coin::new(d, amount).unwrap()
    }

    #[test]
    fn defaults_to_zero() {
        assert_eq!(
            keeper().get_utoken_supply(&MockStorage::new(), &denom("u/x")),
            coin("u/x", 0)
        );
    }

    #[test]
    fn zero_is_stored() {
        let keeper = keeper();
        let mut storage = MockStorage::new();

        keeper
            .set_utoken_supply(&mut storage, &coin("u/x", 200))
            .unwrap();
        keeper.set_utoken_supply(&mut storage, &coin("u/x", 0)).unwrap();

        assert!(UTOKEN_SUPPLY.has(&storage, &denom("u/x")));
        assert_eq!(
            keeper.get_utoken_supply(&storage, &denom("u/x")),
            coin("u/x", 0)
        );
        assert_eq!(keeper.get_all_utoken_supply(&storage).unwrap(), vec![
            coin("u/x", 0)
        ]);
    }

    #[test_case("y", 200 ; "unknown base denom")]
    #[test_case("x", 200 ; "accepted base denom")]
    #[test_case("u/y", 200 ; "utoken of unknown denom")]
    #[test_case("u/y", 0 ; "zero amount of unknown utoken")]
    #[test_case("u/u/x", 1 ; "nested utoken")]
    fn rejects_unaccepted_denoms(d: &str, amount: u128) {
        let mut storage = MockStorage::new();

        let res = keeper().set_utoken_supply(&mut storage, &coin(d, amount));

        assert!(matches!(
            res,
            Err(LeverageError::InvalidAsset { coin: c }) if c == format!("{amount}{d}")
        ));
        assert!(storage.is_empty());
    }

    #[test]
    #[should_panic(expected = "corrupted uToken supply record for denom `u/x`")]
    fn corrupted_supply_aborts() {
        let mut storage = MockStorage::new();
        UTOKEN_SUPPLY
            .path(&denom("u/x"))
            .save_raw(&mut storage, &[1, 2, 3]);

        keeper().get_utoken_supply(&storage, &denom("u/x"));
    }

    #[test]
    fn corrupted_supply_tolerated_reads_zero() {
        let keeper = Keeper::new(
            DecodePolicies {
                utoken_supply: DecodePolicy::Tolerate,
                ..Default::default()
            },
            StaticRegistry::default(),
        );
        let mut storage = MockStorage::new();
        UTOKEN_SUPPLY
            .path(&denom("u/x"))
            .save_raw(&mut storage, &[1, 2, 3]);

        assert_eq!(
            keeper.get_utoken_supply(&storage, &denom("u/x")),
            coin("u/x", 0)
        );
    }
}
