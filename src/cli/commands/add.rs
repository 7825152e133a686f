//! `passkeep add` — add a credential entry to the vault.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PasskeepError, Result};

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    website: &str,
    username: &str,
    password: Option<&str>,
    totp_seed: &str,
) -> Result<()> {
    // Prompt for the entry password if it wasn't passed as a flag.
    let entry_password = match password {
        Some(p) => Zeroizing::new(p.to_string()),
        None => Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt(format!("Password for {username}@{website}"))
                .interact()
                .map_err(|e| PasskeepError::CommandFailed(format!("password prompt: {e}")))?,
        ),
    };

    let mut vault = open_vault(cli)?;
    let id = vault.add_entry(website, username, &entry_password, totp_seed)?;
    output::success(&format!("Added entry #{id} for {website}"));
    vault.close()
}
