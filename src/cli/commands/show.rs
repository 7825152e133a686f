//! `passkeep show` — print a single entry, including its TOTP code.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PasskeepError, Result};
use crate::totp;

/// Execute the `show` command.
pub fn execute(cli: &Cli, id: i64) -> Result<()> {
    let vault = open_vault(cli)?;

    let entry = vault.entry(id).ok_or(PasskeepError::EntryNotFound(id))?;

    println!("Website:  {}", entry.website);
    println!("Username: {}", entry.username);
    println!("Password: {}", entry.password);
    if entry.favorite {
        println!("Favorite: yes");
    }
    println!("Created:  {}", entry.created_at.format("%Y-%m-%d %H:%M:%S"));

    if entry.has_totp() {
        match vault.totp_code(id) {
            Ok(code) => println!(
                "TOTP:     {code} (valid for {}s)",
                totp::seconds_remaining()
            ),
            Err(PasskeepError::InvalidTotpSeed) => {
                output::warning("Stored TOTP seed is not valid base32 — no code available.");
            }
            Err(e) => return Err(e),
        }
    }

    vault.close()
}
