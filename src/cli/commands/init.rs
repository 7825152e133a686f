//! `passkeep init` — create a new vault file.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{prompt_new_password, remember_vault};
use crate::errors::{PasskeepError, Result};
use crate::vault::Vault;

/// Execute the `init` command.
pub fn execute(path: &str, name: Option<&str>) -> Result<()> {
    let path = Path::new(path);

    if Vault::exists(path) {
        output::tip("Use `passkeep add` to add entries to the existing vault.");
        return Err(PasskeepError::VaultAlreadyExists(path.to_path_buf()));
    }

    // Default the vault name to the file stem ("personal.vault" -> "personal").
    let name = match name {
        Some(n) => n.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "vault".to_string()),
    };

    // Parent directories are the front-end's job, not the engine's.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            output::info(&format!("Created directory: {}", parent.display()));
        }
    }

    let password = prompt_new_password()?;

    let vault = Vault::create(path, &name, &password)?;
    remember_vault(&vault);

    output::success(&format!(
        "Vault '{}' created at {}",
        vault.name(),
        path.display()
    ));
    vault.close()?;

    output::tip("Run `passkeep add <website> <username>` to add an entry.");
    output::tip("Run `passkeep list` to see all entries.");

    Ok(())
}
