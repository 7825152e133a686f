//! `passkeep totp` — print the current one-time code for an entry.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;
use crate::totp;

/// Execute the `totp` command.
pub fn execute(cli: &Cli, id: i64) -> Result<()> {
    let vault = open_vault(cli)?;

    let code = vault.totp_code(id)?;
    vault.close()?;

    if code.is_empty() {
        output::info(&format!("Entry #{id} has no TOTP seed configured."));
        return Ok(());
    }

    println!("{code}");
    output::tip(&format!("Valid for {}s", totp::seconds_remaining()));
    Ok(())
}
