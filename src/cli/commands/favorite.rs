//! `passkeep favorite` — toggle an entry's favorite flag.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PasskeepError, Result};

/// Execute the `favorite` command.
pub fn execute(cli: &Cli, id: i64) -> Result<()> {
    let mut vault = open_vault(cli)?;

    if vault.entry(id).is_none() {
        vault.close()?;
        return Err(PasskeepError::EntryNotFound(id));
    }

    let state = vault.toggle_favorite(id)?;
    if state {
        output::success(&format!("Entry #{id} marked as favorite"));
    } else {
        output::success(&format!("Entry #{id} is no longer a favorite"));
    }

    vault.close()
}
