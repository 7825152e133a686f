//! `passkeep remove` — delete an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PasskeepError, Result};

/// Execute the `remove` command.
pub fn execute(cli: &Cli, id: i64, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry #{id}?"))
            .default(false)
            .interact()
            .map_err(|e| PasskeepError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let mut vault = open_vault(cli)?;

    if vault.entry(id).is_none() {
        output::warning(&format!("No entry with id {id} — nothing removed."));
    } else {
        vault.remove_entry(id)?;
        output::success(&format!("Removed entry #{id}"));
    }

    vault.close()
}
