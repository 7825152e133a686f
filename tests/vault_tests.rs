//! End-to-end tests for the vault lifecycle.

use std::fs;

use passkeep::crypto::seal;
use passkeep::errors::PasskeepError;
use passkeep::vault::{container, RecordStore, Vault, VaultInfo, CURRENT_FORMAT_VERSION};
use tempfile::TempDir;

const PASSWORD: &str = "Sup3r$ecret!";

/// Helper: a vault file path inside a fresh temp dir.
fn vault_path() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("test.vault");
    (dir, path)
}

// ---------------------------------------------------------------------------
// Create / open round-trip
// ---------------------------------------------------------------------------

#[test]
fn create_then_reopen_empty_vault() {
    let (_dir, path) = vault_path();

    let vault = Vault::create(&path, "Demo", PASSWORD).expect("create vault");
    assert_eq!(vault.name(), "Demo");
    vault.close().unwrap();

    let vault = Vault::open(&path, PASSWORD).expect("open vault");
    assert_eq!(vault.name(), "Demo");
    assert_eq!(vault.entry_count(), 0);
}

#[test]
fn entries_survive_close_and_reopen_with_same_id() {
    let (_dir, path) = vault_path();

    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();
    let id = vault
        .add_entry("example.com", "alice", "Aa1!aaaa", "")
        .unwrap();
    vault.close().unwrap();

    let vault = Vault::open(&path, PASSWORD).unwrap();
    let entries = vault.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].website, "example.com");
    assert_eq!(entries[0].username, "alice");
    assert_eq!(entries[0].password, "Aa1!aaaa");
    assert!(!entries[0].favorite);
}

#[test]
fn wrong_password_fails_and_leaves_file_untouched() {
    let (_dir, path) = vault_path();
    Vault::create(&path, "Demo", PASSWORD).unwrap().close().unwrap();

    let before = fs::read(&path).unwrap();

    let result = Vault::open(&path, "wrong");
    assert!(matches!(result, Err(PasskeepError::IncorrectPassword)));

    let after = fs::read(&path).unwrap();
    assert_eq!(before, after, "a failed open must not modify the file");
}

#[test]
fn open_missing_or_garbage_file_is_not_a_vault() {
    let (dir, path) = vault_path();

    assert!(matches!(
        Vault::open(&path, PASSWORD),
        Err(PasskeepError::NotAVault(_))
    ));

    let garbage = dir.path().join("garbage.vault");
    fs::write(&garbage, b"definitely not a zip archive").unwrap();
    assert!(matches!(
        Vault::open(&garbage, PASSWORD),
        Err(PasskeepError::NotAVault(_))
    ));
}

#[test]
fn open_refuses_vault_from_a_newer_format() {
    let (_dir, path) = vault_path();

    // A container stamped with a format version this build doesn't
    // know; re-saving it would silently drop unknown fields.
    let blob = seal(&RecordStore::new().to_bytes().unwrap(), PASSWORD).unwrap();
    let info = VaultInfo {
        name: "Future".into(),
        version: "2.0".into(),
    };
    container::write(&path, &info, &blob).unwrap();

    assert!(matches!(
        Vault::open(&path, PASSWORD),
        Err(PasskeepError::UnsupportedFormatVersion(v)) if v == "2.0"
    ));
}

#[test]
fn failed_container_write_cleans_up_its_temp_file() {
    let dir = TempDir::new().unwrap();
    // A directory at the target path makes the final rename fail.
    let target = dir.path().join("taken.vault");
    fs::create_dir(&target).unwrap();

    let blob = seal(&RecordStore::new().to_bytes().unwrap(), PASSWORD).unwrap();
    let info = VaultInfo {
        name: "Demo".into(),
        version: CURRENT_FORMAT_VERSION.to_string(),
    };
    assert!(container::write(&target, &info, &blob).is_err());

    let leftovers: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[test]
fn create_refuses_to_overwrite_existing_file() {
    let (_dir, path) = vault_path();
    fs::write(&path, b"precious data").unwrap();

    assert!(matches!(
        Vault::create(&path, "Demo", PASSWORD),
        Err(PasskeepError::VaultAlreadyExists(_))
    ));
    assert_eq!(fs::read(&path).unwrap(), b"precious data");
}

#[test]
fn exists_probes_format_without_password() {
    let (dir, path) = vault_path();
    assert!(!Vault::exists(&path));

    Vault::create(&path, "Demo", PASSWORD).unwrap().close().unwrap();
    assert!(Vault::exists(&path));

    let not_a_vault = dir.path().join("plain.txt");
    fs::write(&not_a_vault, b"hello").unwrap();
    assert!(!Vault::exists(&not_a_vault));
}

// ---------------------------------------------------------------------------
// Mutations persist implicitly
// ---------------------------------------------------------------------------

#[test]
fn every_mutation_is_persisted_without_explicit_save() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();

    let id = vault.add_entry("a.com", "u", "p1", "").unwrap();
    vault.update_entry(id, "a.com", "u", "p2", "").unwrap();
    let fav = vault.toggle_favorite(id).unwrap();
    assert!(fav);
    // Deliberately no close() — drop without a final save.
    drop(vault);

    let vault = Vault::open(&path, PASSWORD).unwrap();
    let entry = vault.entry(id).expect("entry persisted");
    assert_eq!(entry.password, "p2");
    assert!(entry.favorite);
}

#[test]
fn remove_entry_persists_and_ids_are_not_reused_across_reopen() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();
    let first = vault.add_entry("a.com", "u", "p", "").unwrap();
    vault.remove_entry(first).unwrap();
    vault.close().unwrap();

    let mut vault = Vault::open(&path, PASSWORD).unwrap();
    assert_eq!(vault.entry_count(), 0);
    let second = vault.add_entry("b.com", "u", "p", "").unwrap();
    assert_ne!(second, first);
}

#[test]
fn rejected_validation_leaves_vault_unchanged() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();

    assert!(vault.add_entry("not a url", "u", "p", "").is_err());
    assert!(vault.add_entry("a.com", "   ", "p", "").is_err());
    assert!(vault.add_entry("a.com", "u", "", "").is_err());
    assert!(vault.add_entry("a.com", "u", "p", "bad!seed").is_err());
    assert_eq!(vault.entry_count(), 0);

    let id = vault.add_entry("a.com", "u", "p", "").unwrap();
    assert!(vault.update_entry(id, "also not a url", "u", "p", "").is_err());
    assert_eq!(vault.entry(id).unwrap().website, "a.com");
}

#[test]
fn updating_absent_entry_is_reported() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();

    assert!(matches!(
        vault.update_entry(99, "a.com", "u", "p", ""),
        Err(PasskeepError::EntryNotFound(99))
    ));
}

// ---------------------------------------------------------------------------
// Rename and rekey
// ---------------------------------------------------------------------------

#[test]
fn rename_persists_across_reopen() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Old Name", PASSWORD).unwrap();
    vault.rename("New Name").unwrap();
    vault.close().unwrap();

    let vault = Vault::open(&path, PASSWORD).unwrap();
    assert_eq!(vault.name(), "New Name");
}

#[test]
fn rekey_changes_the_unlocking_password() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();
    vault.add_entry("a.com", "u", "p", "").unwrap();

    assert!(vault.rekey(PASSWORD, "N3w$ecret!pw").unwrap());
    vault.close().unwrap();

    // Old password no longer opens the vault.
    assert!(matches!(
        Vault::open(&path, PASSWORD),
        Err(PasskeepError::IncorrectPassword)
    ));

    // New password does, with all entries intact.
    let vault = Vault::open(&path, "N3w$ecret!pw").unwrap();
    assert_eq!(vault.entry_count(), 1);
}

#[test]
fn rekey_with_wrong_current_password_changes_nothing() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();

    assert!(!vault.rekey("guess", "N3w$ecret!pw").unwrap());
    vault.close().unwrap();

    // Still openable only with the original password.
    assert!(Vault::open(&path, PASSWORD).is_ok());
    assert!(Vault::open(&path, "N3w$ecret!pw").is_err());
}

// ---------------------------------------------------------------------------
// TOTP integration
// ---------------------------------------------------------------------------

#[test]
fn totp_code_for_entry_with_and_without_seed() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();

    let plain = vault.add_entry("a.com", "u", "p", "").unwrap();
    let otp = vault
        .add_entry("b.com", "u", "p", "JBSWY3DPEHPK3PXP")
        .unwrap();

    assert_eq!(vault.totp_code(plain).unwrap(), "");

    let code = vault.totp_code(otp).unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    assert!(matches!(
        vault.totp_code(999),
        Err(PasskeepError::EntryNotFound(999))
    ));
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn export_csv_and_json_contain_all_entries() {
    let (_dir, path) = vault_path();
    let mut vault = Vault::create(&path, "Demo", PASSWORD).unwrap();
    vault.add_entry("a.com", "alice", "pw1", "").unwrap();
    vault
        .add_entry("b.com", "bob", "pw,2", "JBSWY3DPEHPK3PXP")
        .unwrap();

    let csv = vault.export_csv();
    assert!(csv.starts_with("website,username,password,totp_seed\n"));
    assert!(csv.contains("a.com,alice,pw1,"));
    assert!(csv.contains("\"pw,2\""), "commas must be quoted");

    let json = vault.export_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[1]["username"], "bob");
}
