use {
    borsh::{BorshDeserialize, BorshSerialize},
    ledger_types::{StdError, StdResult},
};

/// How values are turned into the bytes stored under a key, and back.
pub trait Codec<T> {
    fn encode(data: &T) -> StdResult<Vec<u8>>;

    fn decode(data: &[u8]) -> StdResult<T>;
}

/// The [Borsh](https://borsh.io) encoding.
///
/// Borsh is deterministic and decoding rejects trailing bytes, so every value
/// has exactly one valid encoding. Amounts and decimals are both stored as
/// their inner 256-bit integer, i.e. 32 little endian bytes.
#[derive(Clone)]
pub struct Borsh;

impl<T> Codec<T> for Borsh
where
    T: BorshSerialize + BorshDeserialize,
{
    fn encode(data: &T) -> StdResult<Vec<u8>> {
        borsh::to_vec(data).map_err(|err| StdError::codec::<T, _>("borsh", err))
    }

    fn decode(data: &[u8]) -> StdResult<T> {
        borsh::from_slice(data).map_err(|err| StdError::codec::<T, _>("borsh", err))
    }
}

// ----------------------------------- tests -----------------------------------
