//! Stable exit codes for wrapped CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed (unreadable config or stats file, invalid arguments, I/O errors).
pub const INVALID: i32 = 1;
/// `wrapped play` received an event with no song, no artist and no minutes.
pub const IGNORED: i32 = 2;
