//! Key equality used when probing a chain.

/// Equality comparator over keys.
///
/// Supplied as a type parameter of [`ChainHashMap`](crate::ChainHashMap),
/// alongside the `BuildHasher`. Implementations must agree with the hasher:
/// keys that compare equal must hash equally.
pub trait KeyEqual<K: ?Sized> {
    fn eq(&self, a: &K, b: &K) -> bool;
}

/// Default comparator: `K: Eq`.
#[derive(Copy, Clone, Debug, Default)]
pub struct EqualTo;

impl<K: ?Sized + Eq> KeyEqual<K> for EqualTo {
    #[inline]
    fn eq(&self, a: &K, b: &K) -> bool {
        a == b
    }
}
