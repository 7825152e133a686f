//! `passkeep rekey` — change the vault master password.
//!
//! Opens the vault with the current password, prompts for a new one,
//! and re-seals the whole record store under the new key.

use crate::cli::output;
use crate::cli::{prompt_password, vault_path, Cli};
use crate::errors::{PasskeepError, Result};
use crate::vault::Vault;

/// Execute the `rekey` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;

    output::info("Enter your current master password.");
    let current = prompt_password()?;
    let mut vault = Vault::open(&path, &current)?;

    output::info("Choose your new master password.");
    let new = prompt_new_rekey_password()?;

    // `open` already proved the current password, so this cannot
    // fail the match — but the engine checks again regardless.
    if !vault.rekey(&current, &new)? {
        vault.close()?;
        return Err(PasskeepError::IncorrectPassword);
    }

    output::success(&format!(
        "Master password changed for '{}' ({} entries re-encrypted)",
        vault.name(),
        vault.entry_count()
    ));
    vault.close()
}

/// Prompt for the new password with confirmation, enforcing the
/// minimum policy.  `PASSKEEP_NEW_PASSWORD` overrides the prompt for
/// scripted use — deliberately a different variable from the one the
/// open prompt reads, so both passwords can be supplied.
fn prompt_new_rekey_password() -> Result<zeroize::Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSKEEP_NEW_PASSWORD") {
        if !pw.is_empty() {
            crate::validate::master_password(&pw)?;
            return Ok(zeroize::Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose new master password")
            .with_confirmation("Confirm new master password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| PasskeepError::CommandFailed(format!("password prompt: {e}")))?;

        if let Err(e) = crate::validate::master_password(&password) {
            output::warning(&format!("{e}. Try again."));
            continue;
        }

        return Ok(zeroize::Zeroizing::new(password));
    }
}
