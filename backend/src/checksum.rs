//! Content fingerprints for datasets and snapshots.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of a sequence of content parts.
///
/// Parts are length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for part in parts {
        let bytes = part.as_ref();
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }
    hex::encode(hasher.finalize())
}
