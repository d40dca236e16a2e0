//! Interactive menu for `wrapped menu`.
//!
//! Reads choices line by line from any [`BufRead`] and writes prompts and
//! summaries to any [`Write`], so tests can script a whole session.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;

use crate::core::codec::parse_minutes;
use crate::core::state_update::record_play;
use crate::core::summary::render_summary;
use crate::core::types::{PlayEvent, PlayOutcome, WrappedState};
use crate::io::store::RowStore;
use crate::session::{load_saved_stats, save_stats};

const OPTIONS: &str = "Options: 1) import  2) export  3) add play  4) quit";

/// Run the menu loop against `store` until the user quits or input ends.
///
/// `label` names the store in status messages. The current stats are saved
/// to `store` on exit and returned, unless the store could not be read and
/// nothing was recorded since.
pub fn run_menu<S, R, W>(
    store: &mut S,
    label: &str,
    top_n: usize,
    mut input: R,
    mut output: W,
) -> Result<WrappedState>
where
    S: RowStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\nSpopi Wrapped")?;
    writeln!(output, "Loading your listening stats...\n")?;
    let loaded = import(&*store, label, top_n, &mut output)?;
    let mut save_on_exit = loaded.is_some();
    let mut state = loaded.unwrap_or_default();

    loop {
        write!(output, "{}", render_summary(&state))?;
        writeln!(output)?;
        writeln!(output, "{OPTIONS}")?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            break;
        };
        match choice.to_lowercase().as_str() {
            "1" => {
                if let Some(imported) = import(&*store, label, top_n, &mut output)? {
                    state = imported;
                    save_on_exit = true;
                }
            }
            "2" => export(store, label, &state, &mut output)?,
            "3" => {
                if add_play(&mut state, top_n, &mut input, &mut output)? == PlayOutcome::Recorded {
                    save_on_exit = true;
                }
            }
            "4" => break,
            _ => writeln!(output, "Unknown option. Choose 1/2/3/4.")?,
        }
        writeln!(output)?;
    }

    if !save_on_exit {
        warn!("stats were never loaded; leaving the store untouched");
    } else if let Err(err) = save_stats(store, &state) {
        warn!(error = %format!("{err:#}"), "saving stats on exit failed");
        writeln!(output, "Could not save stats: {err:#}")?;
    }
    writeln!(output, "\nThanks for checking your Spopi Wrapped!\n")?;
    Ok(state)
}

fn import<S: RowStore, W: Write>(
    store: &S,
    label: &str,
    top_n: usize,
    output: &mut W,
) -> Result<Option<WrappedState>> {
    match load_saved_stats(store, top_n) {
        Ok(Some(state)) => {
            writeln!(output, "Imported stats from {label}")?;
            Ok(Some(state))
        }
        Ok(None) => {
            writeln!(output, "No saved stats yet")?;
            Ok(Some(WrappedState::default()))
        }
        Err(err) => {
            writeln!(output, "Could not import stats: {err:#}")?;
            Ok(None)
        }
    }
}

fn export<S: RowStore, W: Write>(
    store: &mut S,
    label: &str,
    state: &WrappedState,
    output: &mut W,
) -> Result<()> {
    match save_stats(store, state) {
        Ok(()) => writeln!(output, "Exported stats to {label}")?,
        Err(err) => writeln!(output, "Could not export stats: {err:#}")?,
    }
    Ok(())
}

fn add_play<R: BufRead, W: Write>(
    state: &mut WrappedState,
    top_n: usize,
    input: &mut R,
    output: &mut W,
) -> Result<PlayOutcome> {
    let song = prompt(input, output, "Song name: ")?.unwrap_or_default();
    let artist = prompt(input, output, "Artist name: ")?.unwrap_or_default();
    let raw_minutes = prompt(input, output, "Minutes listened: ")?.unwrap_or_else(|| "0".to_string());
    let minutes = match parse_minutes(&raw_minutes) {
        Some(minutes) => minutes,
        None => {
            writeln!(output, "Invalid minutes; using 0.")?;
            0
        }
    };

    let event = PlayEvent::new(song, artist, minutes);
    let outcome = record_play(state, &event, top_n);
    match outcome {
        PlayOutcome::Ignored => writeln!(output, "No event captured.")?,
        PlayOutcome::Recorded => writeln!(
            output,
            "Recorded play for '{}' by {} (+{} min)",
            event.song, event.artist, event.minutes
        )?,
    }
    Ok(outcome)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

/// Read one trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
