//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is deliberately high (100 000 rounds) so that
//! brute-forcing a master password against a stolen vault file stays
//! expensive.  The same password + salt always produces the same key.

use pbkdf2::pbkdf2_hmac;
use rand::TryRngCore;
use sha2::Sha256;

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 100_000;

/// Derive a 32-byte key from a password and salt.
pub fn derive_key(password: &str, salt: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, ITERATIONS, &mut key);
    key
}

/// Generate a cryptographically random 16-byte salt.
///
/// An OS RNG failure is unrecoverable; nothing in the vault may be
/// sealed without fresh entropy.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .expect("OS RNG unavailable");
    salt
}
