//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PasskeepError, Result};
use crate::validate;
use crate::vault::Vault;

/// Passkeep CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passkeep",
    about = "Local encrypted password vault with TOTP support",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: most recently used vault)
    #[arg(long, global = true)]
    pub vault: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new vault file
    Init {
        /// Path for the new vault file (e.g. ~/vaults/personal.vault)
        path: String,

        /// Vault name (defaults to the file stem)
        #[arg(long)]
        name: Option<String>,
    },

    /// Add a credential entry
    Add {
        /// Website URL or domain
        website: String,

        /// Login name for the site
        username: String,

        /// Entry password (omit for interactive prompt)
        #[arg(long)]
        password: Option<String>,

        /// Base32 TOTP seed, if the site uses one-time codes
        #[arg(long, default_value = "")]
        totp: String,
    },

    /// List all entries
    List,

    /// Show a single entry, including its current TOTP code
    Show {
        /// Entry id (from `list`)
        id: i64,
    },

    /// Edit an entry's fields
    Edit {
        /// Entry id (from `list`)
        id: i64,

        /// New website (keeps current if omitted)
        #[arg(long)]
        website: Option<String>,

        /// New username (keeps current if omitted)
        #[arg(long)]
        username: Option<String>,

        /// New password (keeps current if omitted)
        #[arg(long)]
        password: Option<String>,

        /// New TOTP seed (keeps current if omitted; pass "" to clear)
        #[arg(long)]
        totp: Option<String>,
    },

    /// Remove an entry
    Remove {
        /// Entry id (from `list`)
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Toggle an entry's favorite flag
    Favorite {
        /// Entry id (from `list`)
        id: i64,
    },

    /// Print the current TOTP code for an entry
    Totp {
        /// Entry id (from `list`)
        id: i64,
    },

    /// Rename the vault
    Rename {
        /// New vault name
        name: String,
    },

    /// Change the vault's master password
    Rekey,

    /// Export all entries to CSV or JSON
    Export {
        /// Output format: csv (default) or json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show or clear the recent vault list
    Recent {
        /// Clear the list instead of showing it
        #[arg(long)]
        clear: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `PASSKEEP_PASSWORD` env var (scripting/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on
/// drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSKEEP_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| PasskeepError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used by `init`
/// and `rekey`).  Enforces the minimum password policy.
///
/// Also respects `PASSKEEP_PASSWORD` for scripted usage.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSKEEP_PASSWORD") {
        if !pw.is_empty() {
            validate::master_password(&pw)?;
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation("Confirm master password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| PasskeepError::CommandFailed(format!("password prompt: {e}")))?;

        if let Err(e) = validate::master_password(&password) {
            output::warning(&format!("{e}. Try again."));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Resolve the vault path from `--vault` or the recent-vaults list.
pub fn vault_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.vault {
        return Ok(PathBuf::from(path));
    }

    let settings = Settings::load(&Settings::config_dir())?;
    match settings.most_recent() {
        Some(recent) => Ok(PathBuf::from(&recent.path)),
        None => Err(PasskeepError::CommandFailed(
            "no vault specified — pass --vault <path> or create one with `passkeep init`".into(),
        )),
    }
}

/// Prompt for the master password and unlock the vault at the resolved
/// path, recording it in the recent list on success.
pub fn open_vault(cli: &Cli) -> Result<Vault> {
    let path = vault_path(cli)?;
    let password = prompt_password()?;
    let vault = Vault::open(&path, &password)?;
    remember_vault(&vault);
    Ok(vault)
}

/// Record a vault in the recent list. Failures here are non-fatal —
/// recents are a convenience, not engine state.
pub fn remember_vault(vault: &Vault) {
    let dir = Settings::config_dir();
    if let Ok(mut settings) = Settings::load(&dir) {
        settings.add_recent(vault.path(), vault.name());
        let _ = settings.save(&dir);
    }
}
