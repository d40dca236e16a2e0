//! I/O helpers for wrapped commands.

pub mod config;
pub mod init;
pub mod store;
