//! Play-event transitions for listening stats.

use crate::core::ranking::top_n;
use crate::core::types::{Minutes, PlayEvent, PlayOutcome, WrappedState};

/// Apply `event` to `state` and refresh the derived top lists.
///
/// Song and artist names are trimmed. An event with no song, no artist and no
/// minutes leaves the state untouched.
pub fn record_play(state: &mut WrappedState, event: &PlayEvent, n: usize) -> PlayOutcome {
    let song = event.song.trim();
    let artist = event.artist.trim();
    if song.is_empty() && artist.is_empty() && event.minutes == 0 {
        return PlayOutcome::Ignored;
    }

    apply_play_event(state, song, artist, event.minutes);
    recompute_top_lists(state, n);
    PlayOutcome::Recorded
}

/// Add `minutes` to the total and to the song/artist entries that are named.
///
/// Empty names only contribute to the total.
pub fn apply_play_event(state: &mut WrappedState, song: &str, artist: &str, minutes: u64) {
    state.total_minutes = state.total_minutes.saturating_add(minutes);
    add_minutes(&mut state.artist_minutes, artist, minutes);
    add_minutes(&mut state.song_minutes, song, minutes);
}

/// Rebuild `top_artists` and `top_songs` from the current mappings.
pub fn recompute_top_lists(state: &mut WrappedState, n: usize) {
    state.top_artists = top_n(&state.artist_minutes, n);
    state.top_songs = top_n(&state.song_minutes, n);
}

fn add_minutes(minutes: &mut Minutes, key: &str, amount: u64) {
    if key.is_empty() {
        return;
    }
    let entry = minutes.entry(key.to_string()).or_insert(0);
    *entry = entry.saturating_add(amount);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DEFAULT_TOP_N;

    #[test]
    fn record_play_accumulates_and_ranks() {
        let mut state = WrappedState::default();
        record_play(&mut state, &PlayEvent::new("Song A", "Artist 1", 4), DEFAULT_TOP_N);
        record_play(&mut state, &PlayEvent::new("Song B", "Artist 2", 10), DEFAULT_TOP_N);
        record_play(&mut state, &PlayEvent::new("Song A", "Artist 1", 7), DEFAULT_TOP_N);

        assert_eq!(state.total_minutes, 21);
        assert_eq!(state.artist_minutes.get("Artist 1"), Some(&11));
        assert_eq!(state.song_minutes.get("Song B"), Some(&10));
        assert_eq!(state.top_artists, vec!["Artist 1", "Artist 2"]);
        assert_eq!(state.top_songs, vec!["Song A", "Song B"]);
    }

    #[test]
    fn record_play_ignores_empty_event() {
        let mut state = WrappedState::default();
        let outcome = record_play(&mut state, &PlayEvent::new("  ", "", 0), DEFAULT_TOP_N);
        assert_eq!(outcome, PlayOutcome::Ignored);
        assert_eq!(state, WrappedState::default());
    }

    #[test]
    fn record_play_trims_names() {
        let mut state = WrappedState::default();
        let outcome = record_play(&mut state, &PlayEvent::new(" Intro ", " Band ", 2), DEFAULT_TOP_N);
        assert_eq!(outcome, PlayOutcome::Recorded);
        assert_eq!(state.top_songs, vec!["Intro"]);
        assert_eq!(state.top_artists, vec!["Band"]);
    }

    #[test]
    fn missing_artist_only_counts_towards_song_and_total() {
        let mut state = WrappedState::default();
        record_play(&mut state, &PlayEvent::new("Untitled", "", 3), DEFAULT_TOP_N);
        assert_eq!(state.total_minutes, 3);
        assert!(state.artist_minutes.is_empty());
        assert_eq!(state.song_minutes.get("Untitled"), Some(&3));
        assert!(state.top_artists.is_empty());
    }

    #[test]
    fn zero_minute_play_still_registers_names() {
        let mut state = WrappedState::default();
        let outcome = record_play(&mut state, &PlayEvent::new("Skip", "Someone", 0), DEFAULT_TOP_N);
        assert_eq!(outcome, PlayOutcome::Recorded);
        assert_eq!(state.artist_minutes.get("Someone"), Some(&0));
        assert_eq!(state.top_songs, vec!["Skip"]);
    }

    #[test]
    fn top_lists_are_truncated_to_n() {
        let mut state = WrappedState::default();
        for (index, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            apply_play_event(&mut state, name, name, index as u64 + 1);
        }
        recompute_top_lists(&mut state, 3);
        assert_eq!(state.top_artists, vec!["e", "d", "c"]);
        assert_eq!(state.top_songs, vec!["e", "d", "c"]);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let mut state = WrappedState {
            total_minutes: u64::MAX - 1,
            ..WrappedState::default()
        };
        apply_play_event(&mut state, "s", "a", 5);
        assert_eq!(state.total_minutes, u64::MAX);
    }
}
