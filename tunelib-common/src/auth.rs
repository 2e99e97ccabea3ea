//! Password hashing helpers
//!
//! Credentials are stored as uppercase hex SHA-256 digests alongside a
//! per-user random salt. The digest covers `salt + password` (UTF-8),
//! matching the layout of the seeded administrator row.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a fresh 16-byte salt, hex-encoded uppercase (32 characters)
pub fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    to_hex_upper(&bytes)
}

/// Hash a plaintext password with the given salt
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    to_hex_upper(&hasher.finalize())
}

/// Check a plaintext password against a stored digest
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    hash_password(password, salt).eq_ignore_ascii_case(expected_hash)
}

fn to_hex_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}
