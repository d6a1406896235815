use {
    crate::{INTEREST_SCALARS, InterestScalar, Keeper, LeverageError, LeverageResult},
    ledger_types::{Denom, Number, NumberConst, Order, Storage, Udec256},
};

impl<R> Keeper<R> {
    /// Return the interest scalar of a base denom, which is 1 if it has never
    /// been set.
    ///
    /// ## Panics
    ///
    /// If the stored scalar can't be decoded and the interest scalar decode
    /// policy is `Abort` (the default).
    pub fn get_interest_scalar(&self, storage: &dyn Storage, denom: &Denom) -> Udec256 {
        let loaded = INTEREST_SCALARS.may_load(storage, denom);

        self.decode
            .interest_scalar
            .resolve("interest scalar", denom, loaded)
            .unwrap_or(Udec256::ONE)
    }

    /// Store the interest scalar of a base denom. The value is written even
    /// if it is unchanged.
    ///
    /// Fails with [`LeverageError::InvalidInterestScalar`] if the scalar is
    /// below 1. This doesn't prevent the caller from lowering a scalar that is
    /// currently above 1; use [`Keeper::advance_interest_scalar`] for accrual.
    pub fn set_interest_scalar(
        &self,
        storage: &mut dyn Storage,
        denom: &Denom,
        scalar: Udec256,
    ) -> LeverageResult<()> {
        if scalar < Udec256::ONE {
            return Err(LeverageError::InvalidInterestScalar {
                denom: denom.clone(),
                scalar,
            });
        }

        INTEREST_SCALARS.save(storage, denom, &scalar)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            denom = denom.to_string(),
            scalar = scalar.to_string(),
            "Set interest scalar"
        );

        Ok(())
    }

    /// Multiply the interest scalar of a base denom by `multiplier`, returning
    /// the new scalar.
    ///
    /// `multiplier` must be at least 1, so the scalar never decreases.
    pub fn advance_interest_scalar(
        &self,
        storage: &mut dyn Storage,
        denom: &Denom,
        multiplier: Udec256,
    ) -> LeverageResult<Udec256> {
        if multiplier < Udec256::ONE {
            return Err(LeverageError::InvalidInterestScalar {
                denom: denom.clone(),
                scalar: multiplier,
            });
        }

        let scalar = self
            .get_interest_scalar(storage, denom)
            .checked_mul(multiplier)?;

        self.set_interest_scalar(storage, denom, scalar)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            denom = denom.to_string(),
            multiplier = multiplier.to_string(),
            scalar = scalar.to_string(),
            "Advanced interest scalar"
        );

        Ok(scalar)
    }

    pub fn get_all_interest_scalars(
        &self,
        storage: &dyn Storage,
    ) -> LeverageResult<Vec<InterestScalar>> {
        INTEREST_SCALARS
            .range(storage, Order::Ascending)
            .map(|res| -> LeverageResult<_> {
                let (denom, scalar) = res?;

                Ok(InterestScalar { denom, scalar })
            })
            .collect()
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
        Keeper::new(DecodePolicies::default(), StaticRegistry::default())
    }

    fn uatom() -> Denom {
        Denom::from_str("uatom").unwrap()
    }

    fn dec(s: &str) -> Udec256 {
        Udec256::from_str(s).unwrap()
    }

    #[test]
    fn defaults_to_one() {
        assert_eq!(
            keeper().get_interest_scalar(&MockStorage::new(), &uatom()),
            Udec256::ONE
        );
    }

    #[test_case("1", true; "exactly one")]
    #[test_case("1.05", true; "above one")]
    #[test_case("1000000", true; "far above one")]
    #[test_case("0.999999999999999999", false; "just below one")]
    #[test_case("0", false; "zero")]
    fn scalar_floor(scalar: &str, ok: bool) {
        let keeper = keeper();
        let mut storage = MockStorage::new();

        let res = keeper.set_interest_scalar(&mut storage, &uatom(), dec(scalar));

        if ok {
            assert!(res.is_ok());
            assert_eq!(keeper.get_interest_scalar(&storage, &uatom()), dec(scalar));
        } else {
            assert!(matches!(
                res,
                Err(LeverageError::InvalidInterestScalar { scalar: s, .. }) if s == dec(scalar)
            ));
            assert!(storage.is_empty());
        }
    }

    #[test]
    fn setting_one_is_stored_explicitly() {
        let keeper = keeper();
        let mut storage = MockStorage::new();

        keeper
            .set_interest_scalar(&mut storage, &uatom(), Udec256::ONE)
            .unwrap();

        assert!(INTEREST_SCALARS.has(&storage, &uatom()));
    }

    #[test]
    fn advancing_compounds() {
        let keeper = keeper();
        let mut storage = MockStorage::new();

        let scalar = keeper
            .advance_interest_scalar(&mut storage, &uatom(), dec("1.1"))
            .unwrap();
        assert_eq!(scalar, dec("1.1"));

        let scalar = keeper
            .advance_interest_scalar(&mut storage, &uatom(), dec("1.1"))
            .unwrap();
        assert_eq!(scalar, dec("1.21"));
        assert_eq!(keeper.get_interest_scalar(&storage, &uatom()), dec("1.21"));

        assert!(
            keeper
                .advance_interest_scalar(&mut storage, &uatom(), dec("0.9"))
                .is_err()
        );
        assert_eq!(keeper.get_interest_scalar(&storage, &uatom()), dec("1.21"));
    }

    #[test]
    #[should_panic(expected = "corrupted interest scalar record for denom `uatom`")]
    fn corrupted_scalar_aborts() {
        let mut storage = MockStorage::new();
        INTEREST_SCALARS
            .path(&uatom())
            .save_raw(&mut storage, b"garbage");

        keeper().get_interest_scalar(&storage, &uatom());
    }

    #[test]
    fn corrupted_scalar_tolerated_reads_one() {
        let keeper = Keeper::new(
            DecodePolicies {
                interest_scalar: DecodePolicy::Tolerate,
                ..Default::default()
            },
            StaticRegistry::default(),
        );
        let mut storage = MockStorage::new();
        INTEREST_SCALARS
            .path(&uatom())
            .save_raw(&mut storage, b"garbage");

        assert_eq!(keeper.get_interest_scalar(&storage, &uatom()), Udec256::ONE);
    }
}
