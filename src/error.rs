//! Error type for fallible lookups.

use thiserror::Error;

/// Raised by [`ChainHashMap::at`](crate::ChainHashMap::at) when the key is
/// absent. Every other operation reports a miss through its return value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("key not found in hash table")]
    KeyNotFound,
}

#[cfg(test)]
mod tests {
    use super::LookupError;

    #[test]
    fn display_message() {
        assert_eq!(
            LookupError::KeyNotFound.to_string(),
            "key not found in hash table"
        );
    }
}
