//! Growth trigger and the rebuild of the bucket array.

use crate::chain::empty_buckets;
use crate::chain_hash_map::ChainHashMap;
use crate::primes::find_next_prime;
use core::hash::{BuildHasher, Hash};
use core::mem;
use log::debug;

impl<K, V, S, E> ChainHashMap<K, V, S, E>
where
    K: Hash,
    S: BuildHasher,
{
    /// True if holding `len` entries in the current buckets would exceed the
    /// maximum load factor.
    #[inline]
    pub(crate) fn should_grow_at(&self, len: usize) -> bool {
        self.load_check
            .exceeds(len, self.buckets.len(), self.max_load_factor)
    }

    /// Moves every entry into `find_next_prime(2 * capacity)` buckets.
    ///
    /// Old chains are drained in bucket order, so entries meeting in a new
    /// bucket keep the order in which they were visited.
    pub(crate) fn rehash(&mut self) {
        let _g = self.reentrancy.enter();
        let old_capacity = self.buckets.len();
        let new_capacity = find_next_prime(old_capacity.saturating_mul(2));

        let mut fresh = empty_buckets(new_capacity);
        for mut chain in mem::take(&mut self.buckets) {
            for entry in chain.drain() {
                let hash = self.hasher.hash_one(entry.key());
                fresh[(hash % new_capacity as u64) as usize].push(entry);
            }
        }
        self.buckets = fresh;

        debug!(
            "rehash: {} -> {} buckets, {} entries",
            old_capacity, new_capacity, self.len
        );
    }
}
