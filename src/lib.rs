//! chain-hashmap: a single-threaded hash map that resolves collisions by
//! separate chaining over a prime-sized bucket array.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, predictable associative container whose bucket
//!   placement and growth can be reasoned about from the outside.
//! - Layers:
//!   - `primes`: `is_prime` / `find_next_prime`, used wherever a bucket
//!     count is chosen.
//!   - `chain`: `Entry<K, V>` and the `Vec`-backed chain holding every
//!     entry that shares a bucket, in insertion order.
//!   - `ChainHashMap<K, V, S, E>`: the bucket array plus entry count and
//!     growth settings; all lookups go through `hash(key) % capacity`.
//!   - `rehash`: growth trigger and the rebuild into
//!     `find_next_prime(2 * capacity)` buckets.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` (no locking, no atomics).
//! - At most one entry per key; inserting an existing key overwrites its
//!   value in place.
//! - Hashing (`S: BuildHasher`) and key equality (`E: KeyEqual<K>`) are type
//!   parameters, resolved at compile time.
//! - The table grows, never shrinks. Erase and clear keep the capacity.
//!
//! Growth
//! - Checked only when a new key is added. The configured [`LoadCheck`]
//!   decides whether `len / capacity` is computed exactly or truncated to
//!   an integer first; see [`TableConfig`].
//! - A rehash is a single pass: the old chains are drained in bucket order
//!   into a freshly allocated array, recomputing each key's hash.
//!
//! Reentrancy
//! - User hashers and comparators run while a chain is probed. Debug builds
//!   panic if that code re-enters the same map; release builds skip the
//!   check entirely.
//!
//! Quirks kept on purpose
//! - `count(key)` is the occupancy of the key's bucket, not 0/1 membership.
//! - `from_entries` sizes the array to the number of pairs given, without
//!   rounding up to a prime.
//! - `Display` prints values only, one per line, bucket by bucket.
//!
//! Logging goes through the `log` facade: construction and `clear` at
//! `trace`, each rehash at `debug`.
//!
//! ```
//! use chain_hashmap::{ChainHashMap, LookupError};
//!
//! let mut m: ChainHashMap<&str, i32> = ChainHashMap::new();
//! assert!(m.insert("a", 1));
//! assert!(!m.insert("a", 3));
//! *m.get_or_insert_default("b") += 2;
//! assert_eq!(m.len(), 2);
//! assert_eq!(m.at(&"zzz"), Err(LookupError::KeyNotFound));
//! ```

mod chain;
mod chain_hash_map;
mod chain_hash_map_proptest;
pub mod config;
mod error;
mod key_eq;
pub mod primes;
mod reentrancy;
mod rehash;

// Public surface
pub use chain::Entry;
pub use chain_hash_map::ChainHashMap;
pub use config::{LoadCheck, TableConfig};
pub use error::LookupError;
pub use key_eq::{EqualTo, KeyEqual};
