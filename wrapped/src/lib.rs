//! Persistent listening statistics with deterministic top-N rankings.
//!
//! The crate keeps a running total of minutes listened plus per-artist and
//! per-song breakdowns, and stores them as a single CSV row between runs.
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (row codec, ranking, play-event
//!   updates, summary rendering). No I/O, never fails on malformed input.
//! - **[`io`]**: Side-effecting operations (config file, CSV row store,
//!   scaffolding).
//!
//! Orchestration modules ([`session`], [`menu`]) coordinate core logic with
//! I/O to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod menu;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
