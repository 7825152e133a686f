//! In-memory record store held inside an unlocked vault.
//!
//! The store is an ordered collection of `Entry` values plus a
//! persistent id counter.  It serializes to JSON and lives only inside
//! the encrypted `vault.db` member of the container — the schema here
//! is private to the engine.
//!
//! Schema migration is driven by an explicit dispatch table: each
//! format version that added fields declares its additive defaults
//! once, and `from_bytes` backfills them into raw rows read from an
//! older vault before strict deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{PasskeepError, Result};

use super::entry::Entry;

/// Format version written by this build.
pub const CURRENT_FORMAT_VERSION: &str = "1.1";

/// Additive schema changes, keyed by the format version that introduced
/// them.  Each migration lists the (field, default) pairs inserted into
/// every entry row read from a vault older than that version.
const MIGRATIONS: &[(&str, &[(&str, fn() -> Value)])] = &[(
    // 1.1 added TOTP seeds and favorites.
    "1.1",
    &[
        ("totp_seed", || Value::String(String::new())),
        ("favorite", || Value::Bool(false)),
    ],
)];

/// The ordered entry collection of an unlocked vault.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecordStore {
    /// Next id to hand out.  Persisted so ids of deleted entries are
    /// never reused, mirroring SQLite AUTOINCREMENT semantics.
    #[serde(default)]
    next_id: i64,

    /// Entries in insertion order.
    #[serde(default)]
    entries: Vec<Entry>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Serialization + migration
    // ------------------------------------------------------------------

    /// Deserialize a store from decrypted bytes, migrating rows written
    /// under `from_version` where needed.
    ///
    /// Migration is purely additive: fields introduced by later format
    /// versions are inserted with their declared defaults, existing
    /// fields are never touched.
    pub fn from_bytes(bytes: &[u8], from_version: &str) -> Result<Self> {
        let mut doc: Value = serde_json::from_slice(bytes)
            .map_err(|e| PasskeepError::SerializationError(format!("record store: {e}")))?;

        for &(introduced_in, defaults) in MIGRATIONS {
            if version_older(from_version, introduced_in) {
                backfill_entry_fields(&mut doc, defaults);
            }
        }

        let mut store: RecordStore = serde_json::from_value(doc)
            .map_err(|e| PasskeepError::SerializationError(format!("record store: {e}")))?;

        // Reconcile the counter with the actual rows; vaults written
        // before the counter existed deserialize it as 0.
        let max_id = store.entries.iter().map(|e| e.id).max().unwrap_or(0);
        store.next_id = store.next_id.max(max_id + 1).max(1);

        Ok(store)
    }

    /// Serialize the store for sealing.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| PasskeepError::SerializationError(format!("record store: {e}")))
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Append a new entry and return its id.
    pub fn insert(
        &mut self,
        website: &str,
        username: &str,
        password: &str,
        totp_seed: &str,
    ) -> i64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        self.entries.push(Entry {
            id,
            website: website.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            totp_seed: totp_seed.to_string(),
            favorite: false,
            created_at: chrono::Utc::now(),
        });

        id
    }

    /// Replace all mutable fields of the entry with the given id.
    ///
    /// A no-op if the id is absent — callers that must surface "not
    /// found" check with `get` first.
    pub fn update(&mut self, id: i64, website: &str, username: &str, password: &str, totp_seed: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.website = website.to_string();
            entry.username = username.to_string();
            entry.password = password.to_string();
            entry.totp_seed = totp_seed.to_string();
        }
    }

    /// Remove the entry with the given id. A no-op if absent.
    pub fn delete(&mut self, id: i64) {
        self.entries.retain(|e| e.id != id);
    }

    /// Flip the favorite flag and return the new state.
    ///
    /// Returns `false` without changing anything if the id is absent.
    pub fn toggle_favorite(&mut self, id: i64) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.favorite = !entry.favorite;
                entry.favorite
            }
            None => false,
        }
    }

    /// Look up a single entry by id.
    pub fn get(&self, id: i64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries, in insertion order.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns `true` if a vault stored under `version` must be migrated
/// to the current format.
pub fn needs_migration(version: &str) -> bool {
    version_older(version, CURRENT_FORMAT_VERSION)
}

/// Returns `true` if `version` is newer than the format this build
/// writes.  Such vaults may carry fields a re-save here would drop,
/// so they must not be opened.
pub fn is_future_version(version: &str) -> bool {
    version_older(CURRENT_FORMAT_VERSION, version)
}

/// Insert missing fields with their defaults into every entry row.
fn backfill_entry_fields(doc: &mut Value, defaults: &[(&str, fn() -> Value)]) {
    let Some(rows) = doc.get_mut("entries").and_then(Value::as_array_mut) else {
        return;
    };

    for row in rows {
        let Some(obj) = row.as_object_mut() else {
            continue;
        };
        for &(field, default) in defaults {
            if !obj.contains_key(field) {
                obj.insert(field.to_string(), default());
            }
        }
    }
}

/// Compare two "major.minor" version strings.
fn version_older(version: &str, than: &str) -> bool {
    parse_version(version) < parse_version(than)
}

fn parse_version(version: &str) -> (u32, u32) {
    let mut parts = version.splitn(2, '.');
    let major = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let minor = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    (major, minor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrates_1_0_rows_to_current_schema() {
        // A 1.0 store predates totp_seed, favorite, and the id counter.
        let old = br#"{"entries": [
            {"id": 1, "website": "a.com", "username": "u", "password": "p",
             "created_at": "2023-01-01T00:00:00Z"}
        ]}"#;

        let store = RecordStore::from_bytes(old, "1.0").expect("migrate");
        let entry = store.get(1).expect("entry survives");
        assert_eq!(entry.totp_seed, "");
        assert!(!entry.favorite);
    }

    #[test]
    fn migrated_store_continues_id_sequence() {
        let old = br#"{"entries": [
            {"id": 7, "website": "a.com", "username": "u", "password": "p",
             "created_at": "2023-01-01T00:00:00Z"}
        ]}"#;

        let mut store = RecordStore::from_bytes(old, "1.0").unwrap();
        assert_eq!(store.insert("b.com", "u2", "p2", ""), 8);
    }

    #[test]
    fn version_comparison() {
        assert!(version_older("1.0", "1.1"));
        assert!(!version_older("1.1", "1.1"));
        assert!(!version_older("2.0", "1.1"));
    }

    #[test]
    fn future_versions_are_detected() {
        assert!(is_future_version("2.0"));
        assert!(is_future_version("1.2"));
        assert!(!is_future_version("1.1"));
        assert!(!is_future_version("1.0"));
    }
}
