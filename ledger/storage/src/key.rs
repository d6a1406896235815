use {
    ledger_types::{Addr, Denom, StdError, StdResult, nested_namespaces_with_key},
    std::{borrow::Cow, str},
};

// ------------------------------------ key ------------------------------------

/// A key of a [`Map`](crate::Map) or a [`Set`](crate::Set).
///
/// A key is made of one or more raw byte keys. In a compound key `(A, B)`,
/// `A` is the prefix and can be iterated under, e.g. every denom of one
/// account.
pub trait PrimaryKey {
    type Prefix: Prefixer;

    type Suffix: PrimaryKey;

    /// What the key decodes into; owned, where the key itself is borrowed.
    type Output;

    fn raw_keys(&self) -> Vec<Cow<[u8]>>;

    /// Join the raw keys, each but the last prefixed by its 2-byte big endian
    /// length.
    fn joined_key(&self) -> Vec<u8> {
        let mut raw_keys = self.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(None, &raw_keys, last_raw_key.as_ref())
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output>;
}

impl PrimaryKey for () {
    type Output = ();
    type Prefix = ();
    type Suffix = ();

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        if !bytes.is_empty() {
            return Err(StdError::codec::<(), _>("key", "unexpected trailing bytes"));
        }

        Ok(())
    }
}

impl PrimaryKey for &Addr {
    type Output = Addr;
    type Prefix = ();
    type Suffix = ();

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Borrowed(self.as_ref())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        Ok(Addr::from_slice(bytes))
    }
}

impl PrimaryKey for &Denom {
    type Output = Denom;
    type Prefix = ();
    type Suffix = ();

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Owned(self.to_string().into_bytes())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        str::from_utf8(bytes)
            .map_err(|err| StdError::codec::<Self::Output, _>("key", err))?
            .parse()
    }
}

impl<A, B> PrimaryKey for (A, B)
where
    A: PrimaryKey + Prefixer,
    B: PrimaryKey,
{
    type Output = (A::Output, B::Output);
    type Prefix = A;
    type Suffix = B;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        let mut keys = self.0.raw_keys();
        keys.extend(self.1.raw_keys());
        keys
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        let (a_bytes, b_bytes) = split_one_key(bytes)?;
        let a = A::from_slice(a_bytes)?;
        let b = B::from_slice(b_bytes)?;
        Ok((a, b))
    }
}

// ---------------------------------- prefix -----------------------------------

pub trait Prefixer {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>>;
}

impl Prefixer for () {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>> {
        vec![]
    }
}

impl Prefixer for &Addr {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>> {
        self.raw_keys()
    }
}

// ---------------------------------- helpers ----------------------------------

/// Split the first length-prefixed element off a joined key.
fn split_one_key(bytes: &[u8]) -> StdResult<(&[u8], &[u8])> {
    let Some((len_bytes, rest)) = bytes.split_first_chunk::<2>() else {
        return Err(StdError::codec::<(), _>(
            "key",
            "joined key is shorter than its length prefix",
        ));
    };

    let len = u16::from_be_bytes(*len_bytes) as usize;
    if rest.len() < len {
        return Err(StdError::codec::<(), _>(
            "key",
            "joined key is shorter than its declared length",
        ));
    }

    Ok(rest.split_at(len))
}

// ----------------------------------- tests -----------------------------------
