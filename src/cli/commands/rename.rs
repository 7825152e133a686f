//! `passkeep rename` — change the vault's user-facing name.

use crate::cli::output;
use crate::cli::{open_vault, remember_vault, Cli};
use crate::errors::Result;

/// Execute the `rename` command.
pub fn execute(cli: &Cli, name: &str) -> Result<()> {
    let mut vault = open_vault(cli)?;

    vault.rename(name)?;
    remember_vault(&vault);

    output::success(&format!("Vault renamed to '{}'", vault.name()));
    vault.close()
}
