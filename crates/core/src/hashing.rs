//! SHA-256 helpers used for admin API key checks.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Compare a presented secret against an expected one by digest.
///
/// Both sides are hashed first so the comparison always runs over two
/// 64-byte strings regardless of input length.
pub fn secrets_match(presented: &str, expected: &str) -> bool {
    let a = sha256_hex(presented.as_bytes());
    let b = sha256_hex(expected.as_bytes());
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
