//! `passkeep edit` — replace an entry's fields.
//!
//! Flags that are omitted keep the entry's current values, so
//! `passkeep edit 3 --password <new>` changes only the password.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PasskeepError, Result};

/// Execute the `edit` command.
pub fn execute(
    cli: &Cli,
    id: i64,
    website: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
    totp_seed: Option<&str>,
) -> Result<()> {
    let mut vault = open_vault(cli)?;

    let current = vault
        .entry(id)
        .ok_or(PasskeepError::EntryNotFound(id))?
        .clone();

    vault.update_entry(
        id,
        website.unwrap_or(&current.website),
        username.unwrap_or(&current.username),
        password.unwrap_or(&current.password),
        totp_seed.unwrap_or(&current.totp_seed),
    )?;

    output::success(&format!("Updated entry #{id}"));
    vault.close()
}
