//! On-disk vault container: a two-member zip archive.
//!
//! Layout of a `.vault` file:
//!
//! ```text
//! vault.json — plaintext metadata: {"name": ..., "version": ...}
//! vault.db   — encrypted record store: salt(16) || iv(16) || ciphertext
//! ```
//!
//! Writes are atomic: the archive is built fully in memory, written to
//! a temp file in the destination directory, then renamed over the
//! target.  A crash mid-write never corrupts an existing vault.

use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::errors::{PasskeepError, Result};

/// Archive member holding the plaintext metadata JSON.
const INFO_MEMBER: &str = "vault.json";

/// Archive member holding the sealed record store.
const DB_MEMBER: &str = "vault.db";

/// Plaintext vault metadata, readable without the master password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultInfo {
    /// User-facing vault label.
    pub name: String,

    /// Format version the vault was written under (e.g. "1.1").
    pub version: String,
}

/// Cheap existence + format check without decrypting anything.
///
/// Used to distinguish "create new" from "unlock existing" flows.
pub fn probe(path: &Path) -> bool {
    match File::open(path) {
        Ok(file) => ZipArchive::new(file).is_ok(),
        Err(_) => false,
    }
}

/// Read a vault container and return its metadata and sealed blob.
///
/// Fails with `NotAVault` if the path does not exist or is not a zip
/// archive, and with `CorruptVault` if required members are missing or
/// the metadata does not parse.
pub fn read(path: &Path) -> Result<(VaultInfo, Vec<u8>)> {
    if !path.exists() {
        return Err(PasskeepError::NotAVault(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|_| PasskeepError::NotAVault(path.to_path_buf()))?;

    let info: VaultInfo = {
        let mut member = archive
            .by_name(INFO_MEMBER)
            .map_err(|_| PasskeepError::CorruptVault(format!("missing {INFO_MEMBER}")))?;
        let mut json = String::new();
        member.read_to_string(&mut json)?;
        serde_json::from_str(&json)
            .map_err(|e| PasskeepError::CorruptVault(format!("{INFO_MEMBER}: {e}")))?
    };

    let mut blob = Vec::new();
    archive
        .by_name(DB_MEMBER)
        .map_err(|_| PasskeepError::CorruptVault(format!("missing {DB_MEMBER}")))?
        .read_to_end(&mut blob)?;

    Ok((info, blob))
}

/// Write a vault container to disk **atomically**.
///
/// 1. Serialize the metadata JSON.
/// 2. Build the full archive in an in-memory buffer.
/// 3. Write the buffer to a temp file in the same directory.
/// 4. Rename the temp file over the target path.
///
/// The rename ensures readers never see a half-written file.
pub fn write(path: &Path, info: &VaultInfo, sealed_blob: &[u8]) -> Result<()> {
    let json = serde_json::to_string_pretty(info)
        .map_err(|e| PasskeepError::SerializationError(format!("{INFO_MEMBER}: {e}")))?;

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(INFO_MEMBER, options)
        .map_err(|e| PasskeepError::SerializationError(format!("archive: {e}")))?;
    writer.write_all(json.as_bytes())?;
    writer
        .start_file(DB_MEMBER, options)
        .map_err(|e| PasskeepError::SerializationError(format!("archive: {e}")))?;
    writer.write_all(sealed_blob)?;

    let buf = writer
        .finish()
        .map_err(|e| PasskeepError::SerializationError(format!("archive: {e}")))?
        .into_inner();

    // The temp file is in the same directory so rename is guaranteed
    // to be atomic on the same filesystem.
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    // On failure, don't leave the temp file behind next to the vault.
    if let Err(e) = fs::write(&tmp_path, &buf) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}
