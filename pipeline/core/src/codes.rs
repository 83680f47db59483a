//! Anonymization codes.
//!
//! A code is `NFT` followed by the first eight hex digits, upper-cased, of the
//! SHA-256 digest of the project name immediately followed by its 1-based
//! index within its category. The same (name, index) pair always yields the
//! same code. Nothing checks for collisions; distinct indices per category
//! come from the fixed iteration order.

use sha2::{Digest, Sha256};

/// Tag prepended to every code.
pub const CODE_PREFIX: &str = "NFT";

/// Number of digest hex digits kept.
pub const CODE_HASH_LEN: usize = 8;

/// Derive the anonymization code for `project` at position `index`.
pub fn generate_code(project: &str, index: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}{}", project, index).as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("{}{}", CODE_PREFIX, digest[..CODE_HASH_LEN].to_uppercase())
}
