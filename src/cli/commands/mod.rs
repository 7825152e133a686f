//! One module per CLI command.

pub mod add;
pub mod completions;
pub mod edit;
pub mod export;
pub mod favorite;
pub mod init;
pub mod list;
pub mod recent;
pub mod rekey;
pub mod remove;
pub mod rename;
pub mod show;
pub mod totp_cmd;
