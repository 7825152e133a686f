//! Vault module — the encrypted credential container.
//!
//! This module provides:
//! - `Entry`, the credential record type (`entry`)
//! - `RecordStore`, the in-memory entry collection with schema
//!   migration (`store`)
//! - The two-member zip container codec with atomic writes
//!   (`container`)
//! - `Vault`, the high-level lifecycle handle (`manager`)

pub mod container;
pub mod entry;
pub mod manager;
pub mod store;

// Re-export the most commonly used items.
pub use container::VaultInfo;
pub use entry::Entry;
pub use manager::Vault;
pub use store::{RecordStore, CURRENT_FORMAT_VERSION};
