use {
    crate::{Codec, PrimaryKey},
    ledger_types::{
        Order, Record, StdResult, Storage, increment_last_byte, nested_namespaces_with_key, trim,
    },
    std::{borrow::Cow, marker::PhantomData},
};

/// All records sharing a common key prefix, e.g. every denom under one
/// account. `K` is the type of the remaining key elements.
pub struct Prefix<K, T, C>
where
    C: Codec<T>,
{
    namespace: Vec<u8>,
    suffix: PhantomData<K>,
    data: PhantomData<T>,
    codec: PhantomData<C>,
}

impl<K, T, C> Prefix<K, T, C>
where
    C: Codec<T>,
{
    pub fn new(namespace: &[u8], prefixes: &[Cow<[u8]>]) -> Self {
        Self {
            namespace: nested_namespaces_with_key(
                Some(namespace),
                prefixes,
                <Option<&Cow<[u8]>>>::None,
            ),
            suffix: PhantomData,
            data: PhantomData,
            codec: PhantomData,
        }
    }
}

impl<K, T, C> Prefix<K, T, C>
where
    K: PrimaryKey,
    C: Codec<T>,
{
    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.scan_trimmed(storage, Order::Ascending).next().is_none()
    }

    /// Every record under the prefix, with the prefix cut off its key.
    fn scan_trimmed<'a>(
        &self,
        storage: &'a dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        let min = self.namespace.clone();
        let max = increment_last_byte(self.namespace.clone());

        // The iterator outlives `&self`, so it owns its copy of the namespace.
        let namespace = self.namespace.clone();
        let iter = storage
            .scan(Some(&min), Some(&max), order)
            .map(move |(key, value)| (trim(&namespace, &key), value));

        Box::new(iter)
    }

    pub fn keys<'a>(
        &self,
        storage: &'a dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K::Output>> + 'a> {
        let iter = self
            .scan_trimmed(storage, order)
            .map(|(key_raw, _)| K::from_slice(&key_raw));

        Box::new(iter)
    }

    pub fn range<'a>(
        &self,
        storage: &'a dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K::Output, T)>> + 'a> {
        let iter = self
            .scan_trimmed(storage, order)
            .map(|(key_raw, value_raw)| Ok((K::from_slice(&key_raw)?, C::decode(&value_raw)?)));

        Box::new(iter)
    }
}
