//! Load/save orchestration for `wrapped` commands.
//!
//! Glues the pure codec and ranking logic to a [`RowStore`]. Loading always
//! recomputes the derived top lists so they match the stored mappings.

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::core::codec::{decode, encode};
use crate::core::state_update::{recompute_top_lists, record_play};
use crate::core::types::{PlayEvent, PlayOutcome, WrappedState};
use crate::io::store::RowStore;

/// Load stats from `store`, starting empty when nothing was saved yet.
pub fn load_stats<S: RowStore>(store: &S, top_n: usize) -> Result<WrappedState> {
    Ok(load_saved_stats(store, top_n)?.unwrap_or_default())
}

/// Load stats from `store`, or `None` when it holds no row yet.
pub fn load_saved_stats<S: RowStore>(store: &S, top_n: usize) -> Result<Option<WrappedState>> {
    let Some(row) = store.read().context("read stats row")? else {
        debug!("no stored stats");
        return Ok(None);
    };
    let mut state = decode(&row);
    recompute_top_lists(&mut state, top_n);
    debug!(
        total_minutes = state.total_minutes,
        artists = state.artist_minutes.len(),
        songs = state.song_minutes.len(),
        "stats loaded"
    );
    Ok(Some(state))
}

/// Encode `state` and write it to `store`.
pub fn save_stats<S: RowStore>(store: &mut S, state: &WrappedState) -> Result<()> {
    store.write(&encode(state)).context("write stats row")?;
    debug!(total_minutes = state.total_minutes, "stats saved");
    Ok(())
}

/// Load `event` into the stored stats and save them if anything changed.
pub fn record_play_event<S: RowStore>(
    store: &mut S,
    event: &PlayEvent,
    top_n: usize,
) -> Result<(PlayOutcome, WrappedState)> {
    let mut state = load_stats(&*store, top_n)?;
    let outcome = record_play(&mut state, event, top_n);
    if outcome == PlayOutcome::Recorded {
        save_stats(store, &state)?;
        info!(song = %event.song, artist = %event.artist, minutes = event.minutes, "play recorded");
    }
    Ok((outcome, state))
}

/// Replace the stats in `target` with the row stored in `source`.
///
/// Unlike [`load_stats`], a missing source row is an error.
pub fn import_stats<R: RowStore, W: RowStore>(
    source: &R,
    target: &mut W,
    top_n: usize,
) -> Result<WrappedState> {
    let state = load_saved_stats(source, top_n)
        .context("load import source")?
        .ok_or_else(|| anyhow!("import source holds no stats row"))?;
    save_stats(target, &state)?;
    info!(total_minutes = state.total_minutes, "stats imported");
    Ok(state)
}

/// Copy the stats in `source` to `target`.
pub fn export_stats<R: RowStore, W: RowStore>(
    source: &R,
    target: &mut W,
    top_n: usize,
) -> Result<WrappedState> {
    let state = load_stats(source, top_n)?;
    save_stats(target, &state)?;
    info!(total_minutes = state.total_minutes, "stats exported");
    Ok(state)
}
