use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in Passkeep.
#[derive(Debug, Error)]
pub enum PasskeepError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    // --- Container errors ---
    #[error("{0} is not a vault")]
    NotAVault(PathBuf),

    #[error("Vault file is corrupt: {0}")]
    CorruptVault(String),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Vault format version {0} is newer than this build supports")]
    UnsupportedFormatVersion(String),

    // --- Entry validation errors ---
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("TOTP seed is not valid base32")]
    InvalidTotpSeed,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("No entry with id {0}")]
    EntryNotFound(i64),
}

/// Convenience type alias for Passkeep results.
pub type Result<T> = std::result::Result<T, PasskeepError>;
