use std::borrow::Cow;

/// Combine a namespace, a number of prefixes, and a key into a full storage key:
///
/// ```plain
/// len(namespace) | namespace | len(prefix_1) | prefix_1 | ... | key
/// ```
///
/// where `len()` is the length as a 16-bit big endian number and `|` denotes
/// byte concatenation. Because the namespace is length-prefixed, keys under
/// two different namespaces never collide.
pub fn nested_namespaces_with_key(
    maybe_namespace: Option<&[u8]>,
    prefixes: &[Cow<[u8]>],
    maybe_key: Option<&Cow<[u8]>>,
) -> Vec<u8> {
    let prefixed = maybe_namespace
        .into_iter()
        .chain(prefixes.iter().map(|prefix| &**prefix));
    let key = maybe_key.map_or(&[][..], |key| &**key);

    let mut out = Vec::with_capacity(
        prefixed.clone().map(|bytes| bytes.len() + 2).sum::<usize>() + key.len(),
    );
    for bytes in prefixed {
        out.extend(encode_length(bytes));
        out.extend_from_slice(bytes);
    }
    out.extend_from_slice(key);
    out
}

/// The length of a byte slice as two big endian bytes.
///
/// ## Panics
///
/// If the slice is longer than `u16::MAX` bytes. Namespaces, addresses and
/// denoms are all far shorter.
pub fn encode_length<B>(bytes: B) -> [u8; 2]
where
    B: AsRef<[u8]>,
{
    let len = bytes.as_ref().len();
    match u16::try_from(len) {
        Ok(len) => len.to_be_bytes(),
        Err(_) => panic!("key segment too long: {len} bytes"),
    }
}

/// The smallest byte string greater than every string starting with `bytes`,
/// i.e. the exclusive upper bound for iterating a prefix.
pub fn increment_last_byte(mut bytes: Vec<u8>) -> Vec<u8> {
    while let Some(last) = bytes.pop() {
        if last < u8::MAX {
            bytes.push(last + 1);
            return bytes;
        }
    }

    // Every byte was 0xff. A length-prefixed namespace never is.
    debug_assert!(false, "no upper bound for an all-0xff prefix");
    bytes
}

/// Cut the namespace off the front of a storage key.
pub fn trim(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    debug_assert!(key.starts_with(namespace), "key outside of namespace");
    key[namespace.len()..].to_vec()
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test]
    fn namespaces_are_length_prefixed() {
        let key = nested_namespaces_with_key(
            Some(b"ns".as_slice()),
            &[Cow::Borrowed(b"abc".as_slice())],
            Some(&Cow::Borrowed(b"xyz".as_slice())),
        );
        assert_eq!(key, b"\x00\x02ns\x00\x03abcxyz".to_vec());
    }

    #[test_case(vec![1, 2, 3], vec![1, 2, 4]; "simple")]
    #[test_case(vec![1, 255], vec![2]; "trailing max byte")]
    fn incrementing(input: Vec<u8>, expect: Vec<u8>) {
        assert_eq!(increment_last_byte(input), expect);
    }
}
