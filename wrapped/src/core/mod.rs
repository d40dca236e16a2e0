//! Deterministic, pure logic for listening stats.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values, never fail on malformed input, and return deterministic outputs
//! suitable for tests.

pub mod codec;
pub mod ranking;
pub mod state_update;
pub mod summary;
pub mod types;
