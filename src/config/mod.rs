//! Front-end configuration (recent vaults). The engine itself is
//! configuration-free.

pub mod settings;

pub use settings::{RecentVault, Settings};
