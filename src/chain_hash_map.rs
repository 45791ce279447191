//! ChainHashMap: prime-sized bucket array of chains with load-factor growth.

use crate::chain::{empty_buckets, Chain, Entry};
use crate::config::{LoadCheck, TableConfig};
use crate::error::LookupError;
use crate::key_eq::{EqualTo, KeyEqual};
use crate::primes::find_next_prime;
use crate::reentrancy::ReentryCheck;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use log::trace;
use std::collections::hash_map::RandomState;

/// Smallest bucket count a map is ever built with.
pub(crate) const MIN_CAPACITY: usize = 2;

/// A hash map resolving collisions by separate chaining.
///
/// `S` hashes keys and `E` compares them; both are fixed at compile time.
/// The bucket count is prime except right after [`from_entries`] or
/// [`assign_entries`], which size the array to the number of pairs given.
///
/// [`from_entries`]: ChainHashMap::from_entries
/// [`assign_entries`]: ChainHashMap::assign_entries
#[derive(Clone)]
pub struct ChainHashMap<K, V, S = RandomState, E = EqualTo> {
    pub(crate) buckets: Vec<Chain<K, V>>,
    pub(crate) len: usize,
    pub(crate) max_load_factor: f32,
    pub(crate) load_check: LoadCheck,
    pub(crate) hasher: S,
    pub(crate) key_eq: E,
    pub(crate) reentrancy: ReentryCheck,
}

/// Where a key lives, or would live.
struct Probe {
    hash: u64,
    bucket: usize,
    pos: Option<usize>,
}

impl<K, V> ChainHashMap<K, V> {
    /// Empty map with the default capacity request (10, giving 11 buckets).
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Empty map with `find_next_prime(capacity)` buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(TableConfig::default().initial_capacity(capacity))
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self::with_config_and_parts(config, RandomState::new(), EqualTo)
    }
}

impl<K, V> Default for ChainHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S, E> ChainHashMap<K, V, S, E> {
    pub fn with_hasher(hasher: S) -> Self
    where
        E: Default,
    {
        Self::with_config_and_parts(TableConfig::default(), hasher, E::default())
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self
    where
        E: Default,
    {
        Self::with_config_and_parts(
            TableConfig::default().initial_capacity(capacity),
            hasher,
            E::default(),
        )
    }

    pub fn with_config_and_parts(config: TableConfig, hasher: S, key_eq: E) -> Self {
        let capacity = find_next_prime(config.initial_capacity);
        trace!(
            "new table: requested {} buckets, using {}",
            config.initial_capacity,
            capacity
        );
        Self {
            buckets: empty_buckets(capacity),
            len: 0,
            max_load_factor: config.max_load_factor,
            load_check: config.load_check,
            hasher,
            key_eq,
            reentrancy: ReentryCheck::new(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Current `len / capacity`.
    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.capacity() as f32
    }

    #[inline]
    pub fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    /// Changes the growth threshold. Takes effect at the next insert of a new
    /// key; the table is never resized here.
    #[inline]
    pub fn set_max_load_factor(&mut self, max_load_factor: f32) {
        self.max_load_factor = max_load_factor;
    }

    #[inline]
    pub fn load_check(&self) -> LoadCheck {
        self.load_check
    }

    /// Drops every entry. Capacity and load-factor settings are kept.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
        trace!("cleared table of {} buckets", self.buckets.len());
    }
}

impl<K, V, S, E> ChainHashMap<K, V, S, E>
where
    K: Hash,
    S: BuildHasher,
    E: KeyEqual<K>,
{
    /// Builds a map from a list of pairs.
    ///
    /// The bucket count is the number of pairs (at least 2) and is not
    /// rounded to a prime. Pairs are inserted in order, so a repeated key
    /// keeps the last value and growth may kick in along the way.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Entry<K, V>>,
        I::IntoIter: ExactSizeIterator,
        S: Default,
        E: Default,
    {
        let mut map = Self::with_hasher(S::default());
        map.assign_entries(entries);
        map
    }

    /// Replaces the whole content with `entries`, sized like
    /// [`from_entries`](Self::from_entries). The load-factor settings stay.
    pub fn assign_entries<I>(&mut self, entries: I)
    where
        I: IntoIterator,
        I::Item: Into<Entry<K, V>>,
        I::IntoIter: ExactSizeIterator,
    {
        let entries = entries.into_iter();
        let capacity = entries.len().max(MIN_CAPACITY);
        self.buckets = empty_buckets(capacity);
        self.len = 0;
        trace!("assigning {} entries into {} buckets", entries.len(), capacity);
        for entry in entries {
            let entry: Entry<K, V> = entry.into();
            let (key, value) = entry.into_parts();
            self.insert(key, value);
        }
    }

    #[inline]
    fn bucket_for(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    fn probe(&self, key: &K) -> Probe {
        let _g = self.reentrancy.enter();
        let hash = self.hasher.hash_one(key);
        let bucket = self.bucket_for(hash);
        let pos = self.buckets[bucket].position(|k| self.key_eq.eq(k, key));
        Probe { hash, bucket, pos }
    }

    /// Appends a key known to be absent, growing first if the new entry
    /// would push the load factor over the maximum.
    fn push_new(&mut self, hash: u64, key: K, value: V) -> &mut V {
        if self.should_grow_at(self.len + 1) {
            self.rehash();
        }
        let bucket = self.bucket_for(hash);
        self.len += 1;
        self.buckets[bucket].push(Entry::new(key, value)).value_mut()
    }

    /// Inserts or overwrites.
    ///
    /// Returns `true` if `key` was new, `false` if an existing value was
    /// replaced (the length is then unchanged).
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let probe = self.probe(&key);
        match probe.pos {
            Some(pos) => {
                *self.buckets[probe.bucket].entry_mut(pos).value_mut() = value;
                false
            }
            None => {
                self.push_new(probe.hash, key, value);
                true
            }
        }
    }

    /// Copies the value for `key` into `out`. Leaves `out` untouched and
    /// returns `false` on a miss.
    pub fn retrieve(&self, key: &K, out: &mut V) -> bool
    where
        V: Clone,
    {
        match self.get(key) {
            Some(value) => {
                out.clone_from(value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let probe = self.probe(key);
        probe
            .pos
            .map(|pos| self.buckets[probe.bucket].entry(pos).value())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.probe(key).pos.is_some()
    }

    /// Removes `key`. Never shrinks the table.
    pub fn erase(&mut self, key: &K) -> bool {
        let probe = self.probe(key);
        match probe.pos {
            Some(pos) => {
                self.buckets[probe.bucket].remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Mutable access to the value for `key`.
    ///
    /// # Errors
    /// [`LookupError::KeyNotFound`] if `key` is absent. The map is not
    /// modified either way.
    pub fn at(&mut self, key: &K) -> Result<&mut V, LookupError> {
        let probe = self.probe(key);
        match probe.pos {
            Some(pos) => Ok(self.buckets[probe.bucket].entry_mut(pos).value_mut()),
            None => Err(LookupError::KeyNotFound),
        }
    }

    /// Mutable access to the value for `key`, inserting `V::default()` first
    /// if the key is absent.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let probe = self.probe(&key);
        match probe.pos {
            Some(pos) => self.buckets[probe.bucket].entry_mut(pos).value_mut(),
            None => self.push_new(probe.hash, key, V::default()),
        }
    }

    /// Number of entries in the bucket `key` hashes to, whether or not `key`
    /// itself is stored. Use [`contains_key`](Self::contains_key) for
    /// membership.
    pub fn count(&self, key: &K) -> usize {
        let _g = self.reentrancy.enter();
        let bucket = self.bucket_for(self.hasher.hash_one(key));
        self.buckets[bucket].len()
    }
}

impl<K, V, S, E, const N: usize> From<[(K, V); N]> for ChainHashMap<K, V, S, E>
where
    K: Hash,
    S: BuildHasher + Default,
    E: KeyEqual<K> + Default,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_entries(entries)
    }
}

/// Collects first so the result is sized like [`ChainHashMap::from_entries`].
impl<K, V, S, E> FromIterator<(K, V)> for ChainHashMap<K, V, S, E>
where
    K: Hash,
    S: BuildHasher + Default,
    E: KeyEqual<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries: Vec<(K, V)> = iter.into_iter().collect();
        Self::from_entries(entries)
    }
}

impl<K, V, S, E> Extend<(K, V)> for ChainHashMap<K, V, S, E>
where
    K: Hash,
    S: BuildHasher,
    E: KeyEqual<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// One value per line, bucket by bucket, each chain in its stored order.
impl<K, V, S, E> fmt::Display for ChainHashMap<K, V, S, E>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chain in &self.buckets {
            for entry in chain.iter() {
                writeln!(f, "{}", entry)?;
            }
        }
        Ok(())
    }
}

impl<K, V, S, E> fmt::Debug for ChainHashMap<K, V, S, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.buckets
                    .iter()
                    .flat_map(|chain| chain.iter().map(|e| (e.key(), e.value()))),
            )
            .finish()
    }
}
