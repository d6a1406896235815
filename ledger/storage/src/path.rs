use {
    crate::Codec,
    ledger_types::{StdResult, Storage, nested_namespaces_with_key},
    std::{borrow::Cow, marker::PhantomData},
};

/// The storage key of one record of type `T`, encoded with `C`.
///
/// Besides the typed accessors, a path can write pre-encoded bytes, so that a
/// caller updating several records can encode all of them before the first
/// write.
pub struct Path<T, C> {
    storage_key: Vec<u8>,
    data: PhantomData<T>,
    codec: PhantomData<C>,
}

impl<T, C> Path<T, C>
where
    C: Codec<T>,
{
    pub fn new(namespace: &[u8], prefixes: &[Cow<[u8]>], maybe_key: Option<&Cow<[u8]>>) -> Self {
        Self {
            storage_key: nested_namespaces_with_key(Some(namespace), prefixes, maybe_key),
            data: PhantomData,
            codec: PhantomData,
        }
    }

    pub fn storage_key(&self) -> &[u8] {
        &self.storage_key
    }

    pub fn exists(&self, storage: &dyn Storage) -> bool {
        storage.read(&self.storage_key).is_some()
    }

    /// `Ok(None)` if the record is absent, `Err` if it's present but can't be
    /// decoded.
    pub fn may_load(&self, storage: &dyn Storage) -> StdResult<Option<T>> {
        match storage.read(&self.storage_key) {
            Some(raw) => C::decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn save_raw(&self, storage: &mut dyn Storage, data_raw: &[u8]) {
        storage.write(&self.storage_key, data_raw);
    }

    pub fn save(&self, storage: &mut dyn Storage, data: &T) -> StdResult<()> {
        let data_raw = C::encode(data)?;
        self.save_raw(storage, &data_raw);
        Ok(())
    }

    pub fn remove(&self, storage: &mut dyn Storage) {
        storage.remove(&self.storage_key);
    }
}
