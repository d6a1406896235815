use {
    crate::{
        ADJUSTED_BORROWS, ADJUSTED_TOTAL_BORROWS, AdjustedBorrow, Keeper, LeverageError,
        LeverageResult,
    },
    ledger_storage::{Borsh, Codec},
    ledger_types::{
        Addr, Coin, DecCoin, Denom, IsZero, Number, NumberConst, Order, StdResult, Storage,
        Udec256, Uint256,
    },
};

impl<R> Keeper<R> {
    /// Return the adjusted amount of a denom borrowed by an account, which is
    /// zero if the account has no borrow of it.
    pub fn get_adjusted_borrow(
        &self,
        storage: &dyn Storage,
        address: &Addr,
        denom: &Denom,
    ) -> Udec256 {
        let loaded = ADJUSTED_BORROWS.may_load(storage, (address, denom));

        self.decode
            .borrow
            .resolve("adjusted borrow", denom, loaded)
            .unwrap_or(Udec256::ZERO)
    }

    /// Return the sum of the adjusted borrows of a denom across all accounts.
    pub fn get_adjusted_total_borrowed(&self, storage: &dyn Storage, denom: &Denom) -> Udec256 {
        let loaded = ADJUSTED_TOTAL_BORROWS.may_load(storage, denom);

        self.decode
            .borrow
            .resolve("adjusted total borrow", denom, loaded)
            .unwrap_or(Udec256::ZERO)
    }

    /// Set the adjusted amount of a denom borrowed by an account, and move the
    /// denom's total by the difference from the previous amount.
    ///
    /// A zero amount deletes the account's record. The total's record is
    /// deleted once the total reaches zero.
    ///
    /// Both records are encoded before either is written, so an error leaves
    /// the store untouched.
    pub fn set_adjusted_borrow(
        &self,
        storage: &mut dyn Storage,
        address: &Addr,
        adjusted: &DecCoin,
    ) -> LeverageResult<()> {
        if address.is_empty() {
            return Err(LeverageError::EmptyAddress);
        }

        let denom = &adjusted.denom;
        let old = self.get_adjusted_borrow(storage, address, denom);
        let total = self.get_adjusted_total_borrowed(storage, denom);

        let new_total = if adjusted.amount >= old {
            total.checked_add(adjusted.amount.checked_sub(old)?)?
        } else {
            // A total smaller than the decrease means the total's record was
            // unreadable. Clamp instead of underflowing.
            total
                .checked_sub(old.checked_sub(adjusted.amount)?)
                .unwrap_or(Udec256::ZERO)
        };

        let amount_raw = encode_non_zero(&adjusted.amount)?;
        let total_raw = encode_non_zero(&new_total)?;

        let path = ADJUSTED_BORROWS.path((address, denom));
        match amount_raw {
            Some(raw) => path.save_raw(storage, &raw),
            None => path.remove(storage),
        }

        let path = ADJUSTED_TOTAL_BORROWS.path(denom);
        match total_raw {
            Some(raw) => path.save_raw(storage, &raw),
            None => path.remove(storage),
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            address = address.to_string(),
            denom = denom.to_string(),
            old = old.to_string(),
            new = adjusted.amount.to_string(),
            total = new_total.to_string(),
            "Set adjusted borrow"
        );

        Ok(())
    }

    /// Return the amount of a denom owed by an account, interest included,
    /// rounded up to the nearest integer.
    pub fn get_borrow(
        &self,
        storage: &dyn Storage,
        address: &Addr,
        denom: &Denom,
    ) -> LeverageResult<Uint256> {
        Ok(self.get_borrow_dec(storage, address, denom)?.into_int_ceil())
    }

    /// Return the amount of a denom owed by an account, interest included.
    pub fn get_borrow_dec(
        &self,
        storage: &dyn Storage,
        address: &Addr,
        denom: &Denom,
    ) -> LeverageResult<Udec256> {
        let adjusted = self.get_adjusted_borrow(storage, address, denom);
        let scalar = self.get_interest_scalar(storage, denom);

        Ok(adjusted.checked_mul(scalar)?)
    }

    /// Set the amount of a denom owed by an account, converting it to adjusted
    /// units at the current interest scalar. The adjusted amount is rounded
    /// up, so the recorded debt never falls below the amount given.
    pub fn set_borrow(
        &self,
        storage: &mut dyn Storage,
        address: &Addr,
        borrow: &Coin,
    ) -> LeverageResult<()> {
        let scalar = self.get_interest_scalar(storage, &borrow.denom);
        let adjusted = Udec256::checked_from_int(borrow.amount)?.checked_div_ceil(scalar)?;

        self.set_adjusted_borrow(storage, address, &DecCoin {
            denom: borrow.denom.clone(),
            amount: adjusted,
        })
    }

    /// Return the total amount of a denom owed by all accounts, interest
    /// included.
    pub fn get_total_borrowed(
        &self,
        storage: &dyn Storage,
        denom: &Denom,
    ) -> LeverageResult<Udec256> {
        let total = self.get_adjusted_total_borrowed(storage, denom);
        let scalar = self.get_interest_scalar(storage, denom);

        Ok(total.checked_mul(scalar)?)
    }

    /// Return every denom owed by an account, interest included, in ascending
    /// denom order.
    pub fn get_borrower_borrows(
        &self,
        storage: &dyn Storage,
        address: &Addr,
    ) -> LeverageResult<Vec<Coin>> {
        ADJUSTED_BORROWS
            .prefix(address)
            .range(storage, Order::Ascending)
            .map(|res| -> LeverageResult<_> {
                let (denom, adjusted) = res?;
                let scalar = self.get_interest_scalar(storage, &denom);
                let amount = adjusted.checked_mul(scalar)?.into_int_ceil();

                Ok(Coin { denom, amount })
            })
            .collect()
    }

    /// Return every adjusted borrow in the store, ordered by account then
    /// denom.
    pub fn get_all_adjusted_borrows(
        &self,
        storage: &dyn Storage,
    ) -> LeverageResult<Vec<AdjustedBorrow>> {
        ADJUSTED_BORROWS
            .range(storage, Order::Ascending)
            .map(|res| -> LeverageResult<_> {
                let ((address, denom), amount) = res?;

                Ok(AdjustedBorrow {
                    address,
                    amount: DecCoin { denom, amount },
                })
            })
            .collect()
    }
}

fn encode_non_zero(amount: &Udec256) -> StdResult<Option<Vec<u8>>> {
    if amount.is_zero() {
        return Ok(None);
    }

    <Borsh as Codec<Udec256>>::encode(amount).map(Some)
}

// ----------------------------------- tests -----------------------------------
