use dyn_clone::DynClone;

/// A raw key and its value.
pub type Record = (Vec<u8>, Vec<u8>);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// The keyed store of one state transition, as handed over by the host.
///
/// Keys are ordered bytewise. Every ledger operation takes the store as an
/// argument and touches nothing else; committing or discarding the writes is
/// the host's job.
///
/// Implementors are cloneable through [`DynClone`], so a `Box<dyn Storage>`
/// can be snapshotted.
pub trait Storage: DynClone + Send + Sync {
    fn read(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Iterate over the records with `min <= key < max`, where a missing bound
    /// is unbounded. Returns nothing, rather than panicking, when `min > max`.
    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a>;

    fn write(&mut self, key: &[u8], value: &[u8]);

    /// Delete a record. Deleting a key that doesn't exist is a no-op.
    fn remove(&mut self, key: &[u8]);
}

dyn_clone::clone_trait_object!(Storage);
