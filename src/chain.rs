//! Entries and the bucket chains that hold them.

use core::fmt;

/// An owned key/value pair stored in a [`ChainHashMap`](crate::ChainHashMap).
///
/// The key is fixed once stored; only the value can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Renders the value only; keys are not part of the textual form.
impl<K, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// A bucket array of `capacity` empty chains.
pub(crate) fn empty_buckets<K, V>(capacity: usize) -> Vec<Chain<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Chain::default);
    buckets
}

/// Entries sharing one bucket, in insertion order.
///
/// The chain does not enforce key uniqueness; the map scans before it
/// pushes.
#[derive(Clone, Debug)]
pub(crate) struct Chain<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> Chain<K, V> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends `entry` and returns it in its new place.
    pub(crate) fn push(&mut self, entry: Entry<K, V>) -> &mut Entry<K, V> {
        let pos = self.entries.len();
        self.entries.push(entry);
        &mut self.entries[pos]
    }

    /// Position of the first entry whose key satisfies `pred`.
    pub(crate) fn position<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&K) -> bool,
    {
        self.entries.iter().position(|e| pred(&e.key))
    }

    /// Entry at a position obtained from [`Chain::position`].
    pub(crate) fn entry(&self, pos: usize) -> &Entry<K, V> {
        &self.entries[pos]
    }

    pub(crate) fn entry_mut(&mut self, pos: usize) -> &mut Entry<K, V> {
        &mut self.entries[pos]
    }

    /// Removes the entry at `pos`, keeping the remaining entries in order.
    pub(crate) fn remove(&mut self, pos: usize) -> Entry<K, V> {
        self.entries.remove(pos)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Entry<K, V>> {
        self.entries.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buckets_has_requested_length() {
        let buckets: Vec<Chain<u8, u8>> = empty_buckets(7);
        assert_eq!(buckets.len(), 7);
        assert!(buckets.iter().all(|c| c.len() == 0));
    }

    fn chain_of(keys: &[&'static str]) -> Chain<&'static str, usize> {
        let mut c = Chain::default();
        for (i, k) in keys.iter().enumerate() {
            c.push(Entry::new(*k, i));
        }
        c
    }

    #[test]
    fn push_preserves_insertion_order() {
        let c = chain_of(&["a", "b", "c"]);
        let keys: Vec<_> = c.iter().map(|e| *e.key()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn position_finds_first_match() {
        let c = chain_of(&["a", "b", "c"]);
        assert_eq!(c.position(|k| *k == "b"), Some(1));
        assert_eq!(c.position(|k| *k == "z"), None);
        assert_eq!(*c.entry(1).value(), 1);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut c = chain_of(&["a", "b", "c", "d"]);
        let removed = c.remove(1);
        assert_eq!(removed.into_parts(), ("b", 1));
        let keys: Vec<_> = c.iter().map(|e| *e.key()).collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
    }

    /// The chain itself accepts duplicate keys; uniqueness is the map's job.
    #[test]
    fn duplicates_are_not_rejected_by_the_chain() {
        let c = chain_of(&["a", "a"]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.position(|k| *k == "a"), Some(0));
    }

    #[test]
    fn entry_mut_updates_value_in_place() {
        let mut c = chain_of(&["a"]);
        *c.entry_mut(0).value_mut() = 42;
        assert_eq!(*c.entry(0).value(), 42);

        let pushed = c.push(Entry::new("b", 1));
        *pushed.value_mut() += 10;
        assert_eq!(*c.entry(1).value(), 11);
    }

    #[test]
    fn drain_and_clear_empty_the_chain() {
        let mut c = chain_of(&["a", "b"]);
        let drained: Vec<_> = c.drain().map(Entry::into_parts).collect();
        assert_eq!(drained, vec![("a", 0), ("b", 1)]);
        assert_eq!(c.len(), 0);

        let mut c = chain_of(&["x"]);
        c.clear();
        assert_eq!(c.len(), 0);
    }

    #[test]
    fn entry_displays_value_only() {
        let e = Entry::from(("key", 7));
        assert_eq!(e.to_string(), "7");
    }
}
