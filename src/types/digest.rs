//! Deterministic fingerprint of an ordered sequence.
//!
//! A digest lets two runs (or two machines) confirm they built exactly the
//! same index without comparing the keys one by one.

use ssz_rs::prelude::*;
use sha2::{Digest, Sha256};

use crate::error::IndexError;

/// SHA-256 fingerprint of an ordered sequence.
///
/// ## Root
///
/// The root hashes, for every key in order, the length of its SSZ encoding
/// (little-endian `u64`) followed by the encoding itself. Length prefixes
/// keep variable-size keys from running into each other.
///
/// ## Example
///
/// ```
/// use sorted_index::types::IndexDigest;
///
/// let a = IndexDigest::compute(&[1u64, 2, 3]).unwrap();
/// let b = IndexDigest::compute(&[1u64, 2, 3]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct IndexDigest {
    /// Number of keys hashed
    pub len: u64,

    /// SHA-256 over the length-prefixed SSZ encodings of the keys
    pub root: [u8; 32],
}

impl IndexDigest {
    /// Hash `keys` in order.
    ///
    /// # Errors
    ///
    /// [`IndexError::Encoding`] if a key fails to SSZ-encode.
    pub fn compute<K: SimpleSerialize>(keys: &[K]) -> crate::error::Result<Self> {
        let mut hasher = Sha256::new();

        for key in keys {
            let bytes =
                ssz_rs::serialize(key).map_err(|e| IndexError::Encoding(format!("{:?}", e)))?;
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());

        Ok(Self {
            len: keys.len() as u64,
            root,
        })
    }

    /// Root as a lowercase hex string
    pub fn root_hex(&self) -> String {
        hex::encode(self.root)
    }

    /// SSZ encoding of this record (40 bytes).
    ///
    /// # Errors
    ///
    /// [`IndexError::Encoding`] if serialization fails.
    pub fn to_bytes(&self) -> crate::error::Result<Vec<u8>> {
        ssz_rs::serialize(self).map_err(|e| IndexError::Encoding(format!("{:?}", e)))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
