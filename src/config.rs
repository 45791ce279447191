//! Construction-time settings for a [`ChainHashMap`](crate::ChainHashMap).

/// Capacity requested by [`ChainHashMap::new`](crate::ChainHashMap::new).
pub const DEFAULT_CAPACITY: usize = 10;

/// Load factor above which an insert grows the table.
pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 1.0;

/// How the growth trigger computes `len / capacity`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoadCheck {
    /// Floating-point ratio; grows as soon as it exceeds the maximum.
    #[default]
    Exact,
    /// Integer quotient, truncated before the comparison. With a maximum of
    /// 1.0 the table only grows once `len >= 2 * capacity`.
    Truncating,
}

impl LoadCheck {
    /// True if `len` entries in `capacity` buckets exceed `max_load_factor`.
    #[inline]
    pub fn exceeds(self, len: usize, capacity: usize, max_load_factor: f32) -> bool {
        let ratio = match self {
            LoadCheck::Exact => len as f64 / capacity as f64,
            LoadCheck::Truncating => (len / capacity) as f64,
        };
        ratio > f64::from(max_load_factor)
    }
}

/// Settings consumed by
/// [`ChainHashMap::with_config`](crate::ChainHashMap::with_config).
///
/// ```
/// use chain_hashmap::{ChainHashMap, LoadCheck, TableConfig};
///
/// let cfg = TableConfig::default()
///     .initial_capacity(100)
///     .max_load_factor(0.75)
///     .load_check(LoadCheck::Exact);
/// let m: ChainHashMap<u32, u32> = ChainHashMap::with_config(cfg);
/// assert_eq!(m.capacity(), 101);
/// assert_eq!(m.max_load_factor(), 0.75);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    /// Requested bucket count; the table uses the next prime above it.
    pub initial_capacity: usize,
    pub max_load_factor: f32,
    pub load_check: LoadCheck,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            load_check: LoadCheck::default(),
        }
    }
}

impl TableConfig {
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn max_load_factor(mut self, max_load_factor: f32) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    pub fn load_check(mut self, load_check: LoadCheck) -> Self {
        self.load_check = load_check;
        self
    }
}
