//! Vault lifecycle: create, open, mutate, close.
//!
//! A `Vault` value is an *unlocked* vault — it only exists between a
//! successful `create`/`open` and a `close`.  The Closed → Open →
//! Closed state machine therefore maps onto value lifetime, and
//! `&mut self` on every mutation gives the single-writer guarantee the
//! on-disk format needs (every save rewrites the whole archive).
//!
//! Every mutating call persists synchronously, so there is never an
//! "unsaved changes" state.  The decrypted working copy lives only in
//! this struct; the master password is wiped from memory on drop.

use std::path::{Path, PathBuf};

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{seal, unseal};
use crate::errors::{PasskeepError, Result};
use crate::{totp, validate};

use super::container::{self, VaultInfo};
use super::entry::Entry;
use super::store::{self, RecordStore, CURRENT_FORMAT_VERSION};

/// An unlocked vault.  Create one with `Vault::create` or
/// `Vault::open`, then use its methods to manage entries.
pub struct Vault {
    /// Path of the container file on disk.
    path: PathBuf,

    /// User-facing vault label (stored in plaintext metadata).
    name: String,

    /// Format version the vault is stored under.
    format_version: String,

    /// The master password, wiped from memory on drop.
    master_password: Zeroizing<String>,

    /// Decrypted working copy of the record store.
    store: RecordStore,
}

impl Vault {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Returns `true` if `path` holds a vault container.
    ///
    /// Cheap probe, no password needed — used to pick between the
    /// "create new" and "unlock existing" flows.
    pub fn exists(path: &Path) -> bool {
        container::probe(path)
    }

    /// Create a new vault at `path` with an empty record store.
    ///
    /// The parent directory must already exist; creating it is the
    /// caller's responsibility.
    pub fn create(path: &Path, name: &str, master_password: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PasskeepError::InvalidField {
                field: "vault name",
                reason: "must not be empty".into(),
            });
        }
        if path.exists() {
            return Err(PasskeepError::VaultAlreadyExists(path.to_path_buf()));
        }

        let vault = Self {
            path: path.to_path_buf(),
            name: name.to_string(),
            format_version: CURRENT_FORMAT_VERSION.to_string(),
            master_password: Zeroizing::new(master_password.to_string()),
            store: RecordStore::new(),
        };

        vault.save()?;
        Ok(vault)
    }

    /// Unlock an existing vault.
    ///
    /// A wrong password surfaces as `IncorrectPassword` (the sealed
    /// blob fails its padding check), distinct from `NotAVault` /
    /// `CorruptVault` which mean the file itself is bad.  On any
    /// failure no partial state survives — the working copy is only
    /// ever built in memory, after a successful unseal.
    ///
    /// Vaults stored under an older format version are migrated and
    /// immediately rewritten at the current version.  Vaults written
    /// by a newer format are refused: re-saving them here would drop
    /// fields this build does not know about.
    pub fn open(path: &Path, master_password: &str) -> Result<Self> {
        let (info, sealed_blob) = container::read(path)?;

        if store::is_future_version(&info.version) {
            return Err(PasskeepError::UnsupportedFormatVersion(info.version));
        }

        let mut plaintext = unseal(&sealed_blob, master_password)?;
        let store = RecordStore::from_bytes(&plaintext, &info.version);
        plaintext.zeroize();
        let store = store?;

        let migrated = store::needs_migration(&info.version);
        let vault = Self {
            path: path.to_path_buf(),
            name: info.name,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
            master_password: Zeroizing::new(master_password.to_string()),
            store,
        };

        if migrated {
            vault.save()?;
        }

        Ok(vault)
    }

    /// Close the vault: persist one final time and discard the
    /// decrypted working copy.
    ///
    /// Consuming `self` makes double-close unrepresentable; dropping
    /// the value wipes the master password.
    pub fn close(self) -> Result<()> {
        self.save()
    }

    /// Re-seal the record store and rewrite the container atomically.
    ///
    /// Called after every mutation; there is no dirty state to track.
    fn save(&self) -> Result<()> {
        let mut plaintext = self.store.to_bytes()?;
        let sealed_blob = seal(&plaintext, &self.master_password);
        plaintext.zeroize();

        let info = VaultInfo {
            name: self.name.clone(),
            version: self.format_version.clone(),
        };
        container::write(&self.path, &info, &sealed_blob?)
    }

    // ------------------------------------------------------------------
    // Entry operations (each triggers an implicit save)
    // ------------------------------------------------------------------

    /// Validate and insert a new entry, returning its id.
    pub fn add_entry(
        &mut self,
        website: &str,
        username: &str,
        password: &str,
        totp_seed: &str,
    ) -> Result<i64> {
        validate::entry_fields(website, username, password, totp_seed)?;
        let id = self.store.insert(website, username, password, totp_seed);
        self.save()?;
        Ok(id)
    }

    /// Validate and replace the mutable fields of an entry.
    ///
    /// Fails with `EntryNotFound` if the id is absent — nothing is
    /// written in that case.
    pub fn update_entry(
        &mut self,
        id: i64,
        website: &str,
        username: &str,
        password: &str,
        totp_seed: &str,
    ) -> Result<()> {
        validate::entry_fields(website, username, password, totp_seed)?;
        if self.store.get(id).is_none() {
            return Err(PasskeepError::EntryNotFound(id));
        }
        self.store.update(id, website, username, password, totp_seed);
        self.save()
    }

    /// Remove an entry. Removing an absent id is a persisted no-op.
    pub fn remove_entry(&mut self, id: i64) -> Result<()> {
        self.store.delete(id);
        self.save()
    }

    /// Flip an entry's favorite flag and return the new state.
    pub fn toggle_favorite(&mut self, id: i64) -> Result<bool> {
        let state = self.store.toggle_favorite(id);
        self.save()?;
        Ok(state)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        self.store.all()
    }

    /// Look up a single entry by id.
    pub fn entry(&self, id: i64) -> Option<&Entry> {
        self.store.get(id)
    }

    /// Number of entries in the vault.
    pub fn entry_count(&self) -> usize {
        self.store.len()
    }

    /// Current TOTP code for an entry, or `""` if it has no seed.
    pub fn totp_code(&self, id: i64) -> Result<String> {
        let entry = self
            .store
            .get(id)
            .ok_or(PasskeepError::EntryNotFound(id))?;
        totp::generate(&entry.totp_seed)
    }

    // ------------------------------------------------------------------
    // Vault-level operations
    // ------------------------------------------------------------------

    /// Change the vault's user-facing name.
    pub fn rename(&mut self, new_name: &str) -> Result<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(PasskeepError::InvalidField {
                field: "vault name",
                reason: "must not be empty".into(),
            });
        }
        self.name = new_name.to_string();
        self.save()
    }

    /// Replace the master password.
    ///
    /// Returns `false` (and changes nothing) if `current_password`
    /// does not match; the comparison is constant-time.  On success
    /// the in-memory password and the on-disk seal are swapped as one
    /// step — the vault is never re-keyed on disk while the held
    /// password is stale.
    pub fn rekey(&mut self, current_password: &str, new_password: &str) -> Result<bool> {
        let matches: bool = current_password
            .as_bytes()
            .ct_eq(self.master_password.as_bytes())
            .into();
        if !matches {
            return Ok(false);
        }

        self.master_password = Zeroizing::new(new_password.to_string());
        self.save()?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Export all decrypted entries as CSV.
    pub fn export_csv(&self) -> String {
        format_as_csv(self.store.all())
    }

    /// Export all decrypted entries as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self.store.all())
            .map_err(|e| PasskeepError::SerializationError(format!("JSON export: {e}")))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Path of the container file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// User-facing vault label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format version the vault is stored under.
    pub fn format_version(&self) -> &str {
        &self.format_version
    }
}

/// Format entries as CSV with a header row.
fn format_as_csv(entries: &[Entry]) -> String {
    use std::fmt::Write;

    let mut out = String::from("website,username,password,totp_seed\n");
    for e in entries {
        let _ = writeln!(
            out,
            "{},{},{},{}",
            csv_field(&e.website),
            csv_field(&e.username),
            csv_field(&e.password),
            csv_field(&e.totp_seed),
        );
    }
    out
}

/// Quote a CSV field when it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
