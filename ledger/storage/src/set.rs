use {
    crate::{Prefix, Prefixer, PrimaryKey},
    ledger_types::{Order, StdResult, Storage, nested_namespaces_with_key},
    std::marker::PhantomData,
};

/// Mimic the behavior of HashSet or BTreeSet.
///
/// Membership is key presence. Every member is stored with the same one-byte
/// value, [`Set::PRESENCE_MARKER`], which is never read back. Removing a
/// member deletes its key, so a "not a member" value is never persisted.
pub struct Set<'a, T> {
    namespace: &'a [u8],
    item: PhantomData<T>,
}

impl<'a, T> Set<'a, T> {
    /// The value written under every member's key.
    pub const PRESENCE_MARKER: u8 = 0x01;

    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            item: PhantomData,
        }
    }
}

impl<T> Set<'_, T>
where
    T: PrimaryKey,
{
    #[doc(hidden)]
    pub fn storage_key(&self, item: T) -> Vec<u8> {
        let mut raw_keys = item.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(Some(self.namespace), &raw_keys, last_raw_key.as_ref())
    }

    fn no_prefix(&self) -> Prefix<T, (), Marker> {
        Prefix::new(self.namespace, &[])
    }

    pub fn prefix(&self, prefix: T::Prefix) -> SetPrefix<T::Suffix> {
        SetPrefix {
            inner: Prefix::new(self.namespace, &prefix.raw_prefixes()),
        }
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.no_prefix().is_empty(storage)
    }

    // ---------------------- methods for single entries -----------------------

    pub fn has(&self, storage: &dyn Storage, item: T) -> bool {
        storage.read(&self.storage_key(item)).is_some()
    }

    pub fn insert(&self, storage: &mut dyn Storage, item: T) {
        storage.write(&self.storage_key(item), &[Self::PRESENCE_MARKER]);
    }

    pub fn remove(&self, storage: &mut dyn Storage, item: T) {
        storage.remove(&self.storage_key(item));
    }

    // --------------------------- iteration methods ---------------------------

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<T::Output>> + 'b> {
        self.no_prefix().keys(storage, order)
    }
}

/// The members of a [`Set`] sharing a common prefix.
pub struct SetPrefix<K> {
    inner: Prefix<K, (), Marker>,
}

impl<K> SetPrefix<K>
where
    K: PrimaryKey,
{
    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.inner.is_empty(storage)
    }

    pub fn keys<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K::Output>> + 'b> {
        self.inner.keys(storage, order)
    }
}

/// Codec for set values. Only key iteration is exposed on sets, so values are
/// never decoded through this.
#[doc(hidden)]
pub struct Marker;

impl crate::Codec<()> for Marker {
    fn encode(_: &()) -> StdResult<Vec<u8>> {
        Ok(vec![Set::<()>::PRESENCE_MARKER])
    }

    fn decode(_: &[u8]) -> StdResult<()> {
        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------
