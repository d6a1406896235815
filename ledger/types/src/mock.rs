use {
    crate::{Order, Record, Storage},
    std::{collections::BTreeMap, iter, ops::Bound},
};

/// A `BTreeMap` standing in for the host's store in tests.
#[derive(Default, Debug, Clone)]
pub struct MockStorage {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of key-value pairs currently stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Storage for MockStorage {
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.data.get(key).cloned()
    }

    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        // `BTreeMap::range` would panic here.
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Box::new(iter::empty());
            }
        }

        let min = min.map_or(Bound::Unbounded, |bytes| Bound::Included(bytes.to_vec()));
        let max = max.map_or(Bound::Unbounded, |bytes| Bound::Excluded(bytes.to_vec()));
        let iter = self
            .data
            .range((min, max))
            .map(|(k, v)| (k.clone(), v.clone()));

        match order {
            Order::Ascending => Box::new(iter),
            Order::Descending => Box::new(iter.rev()),
        }
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        self.data.insert(key.to_vec(), value.to_vec());
    }

    fn remove(&mut self, key: &[u8]) {
        self.data.remove(key);
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_remove() {
        let mut storage = MockStorage::new();
        assert_eq!(storage.read(b"foo"), None);

        storage.write(b"foo", b"bar");
        assert_eq!(storage.read(b"foo"), Some(b"bar".to_vec()));

        storage.remove(b"foo");
        assert_eq!(storage.read(b"foo"), None);
        assert!(storage.is_empty());

        // Safe to remove twice.
        storage.remove(b"foo");
    }

    #[test]
    fn scan_bounds_and_order() {
        let mut storage = MockStorage::new();
        for key in [b"a", b"b", b"c", b"d"] {
            storage.write(key, &[]);
        }

        let keys = storage
            .scan(Some(b"b".as_slice()), Some(b"d".as_slice()), Order::Ascending)
            .map(|(key, _)| key)
            .collect::<Vec<_>>();
        assert_eq!(keys, vec![b"b".to_vec(), b"c".to_vec()]);

        let keys = storage
            .scan(None, None, Order::Descending)
            .map(|(key, _)| key)
            .collect::<Vec<_>>();
        assert_eq!(keys.first(), Some(&b"d".to_vec()));

        // min > max yields nothing instead of panicking.
        assert_eq!(
            storage
                .scan(Some(b"d".as_slice()), Some(b"a".as_slice()), Order::Ascending)
                .count(),
            0
        );
    }
}
