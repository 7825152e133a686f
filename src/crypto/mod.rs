//! Cryptographic primitives for Passkeep.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-CBC sealing/unsealing of byte blobs (`cipher`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, unseal, derive_key, ...};
pub use cipher::{seal, unseal};
pub use kdf::{derive_key, generate_salt, ITERATIONS, KEY_LEN, SALT_LEN};
