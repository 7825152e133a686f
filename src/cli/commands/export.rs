//! `passkeep export` — export decrypted entries in bulk.
//!
//! Supported formats:
//! - `csv` (default): website,username,password,totp_seed rows
//! - `json`: full entry objects, pretty-printed
//!
//! Export is a pure read: it never mutates the vault.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PasskeepError, Result};

/// Execute the `export` command.
pub fn execute(cli: &Cli, format: &str, output_path: Option<&str>) -> Result<()> {
    let vault = open_vault(cli)?;

    let content = match format {
        "csv" => vault.export_csv(),
        "json" => vault.export_json()?,
        other => {
            return Err(PasskeepError::CommandFailed(format!(
                "unknown export format '{other}' — use 'csv' or 'json'"
            )));
        }
    };
    let count = vault.entry_count();
    vault.close()?;

    match output_path {
        Some(dest) => {
            // Refuse to clobber a vault file with plaintext.
            if Path::new(dest)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("vault"))
            {
                return Err(PasskeepError::CommandFailed(
                    "refusing to export over a .vault file".into(),
                ));
            }

            fs::write(dest, &content)?;
            output::success(&format!(
                "Exported {count} entries to {dest} (format: {format})"
            ));
            output::warning("The export contains plaintext passwords — handle with care.");
        }
        None => {
            // Raw output only, so it can be piped.
            print!("{content}");
        }
    }

    Ok(())
}
