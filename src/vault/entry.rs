//! Credential entry type stored inside a vault.
//!
//! `totp_seed` and `favorite` were introduced in format version 1.1;
//! their serde defaults keep older serialized rows readable (the real
//! backfill happens in the migration table in `store.rs`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single credential entry.
///
/// `id` is the only stable handle for an entry: it is assigned once at
/// insert, never changes, and is never reused after deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier, unique within a vault.
    pub id: i64,

    /// Website URL or domain (e.g. "https://example.com").
    pub website: String,

    /// Login name for the site.
    pub username: String,

    /// The stored password.
    pub password: String,

    /// Base32 TOTP seed; empty string means no OTP is configured.
    #[serde(default)]
    pub totp_seed: String,

    /// Whether the entry is marked as a favorite.
    #[serde(default)]
    pub favorite: bool,

    /// When this entry was created. Set once at insert, immutable.
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Returns `true` if the entry has a TOTP seed configured.
    pub fn has_totp(&self) -> bool {
        !self.totp_seed.is_empty()
    }
}
