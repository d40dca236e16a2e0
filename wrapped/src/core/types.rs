//! Shared deterministic types for the listening stats core.
//!
//! These types are plain owned values. They do not depend on I/O and keep
//! mappings ordered by key so encoded output is stable across runs.

use std::collections::BTreeMap;

/// Accumulated minutes keyed by artist name or song title.
pub type Minutes = BTreeMap<String, u64>;

/// Default size of the derived top lists.
pub const DEFAULT_TOP_N: usize = 3;

/// Aggregated listening statistics for a single user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedState {
    /// Sum of all recorded play durations.
    pub total_minutes: u64,
    pub artist_minutes: Minutes,
    pub song_minutes: Minutes,
    /// Derived from `artist_minutes`; recomputed after every mutation.
    pub top_artists: Vec<String>,
    /// Derived from `song_minutes`; recomputed after every mutation.
    pub top_songs: Vec<String>,
}

/// A single validated play event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayEvent {
    pub song: String,
    pub artist: String,
    pub minutes: u64,
}

impl PlayEvent {
    pub fn new(song: impl Into<String>, artist: impl Into<String>, minutes: u64) -> Self {
        Self {
            song: song.into(),
            artist: artist.into(),
            minutes,
        }
    }
}

/// Result of applying a play event to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The event changed the state and the top lists were recomputed.
    Recorded,
    /// The event carried no song, no artist and no minutes.
    Ignored,
}
