//! Test-only helpers: an in-memory row store and deterministic fixtures.

use anyhow::{Result, bail};

use crate::core::state_update::record_play;
use crate::core::types::{DEFAULT_TOP_N, PlayEvent, WrappedState};
use crate::io::store::RowStore;

/// Row store kept in memory. Counts writes so tests can assert on them.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    row: Option<Vec<String>>,
    writes: usize,
    fail_reads: bool,
}

impl MemoryStore {
    pub fn with_row(row: Vec<String>) -> Self {
        Self {
            row: Some(row),
            ..Self::default()
        }
    }

    /// Store whose reads always fail, like a stats file that cannot be parsed.
    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn row(&self) -> Option<&Vec<String>> {
        self.row.as_ref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RowStore for MemoryStore {
    fn read(&self) -> Result<Option<Vec<String>>> {
        if self.fail_reads {
            bail!("stats row is unreadable");
        }
        Ok(self.row.clone())
    }

    fn write(&mut self, row: &[String]) -> Result<()> {
        self.row = Some(row.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// Build an owned row from string literals.
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|field| field.to_string()).collect()
}

/// Stats built from a fixed play history, with top lists up to date.
pub fn sample_state() -> WrappedState {
    let plays = [
        ("One More Time", "Daft Punk", 15),
        ("La Femme d'Argent", "Air", 12),
        ("D.A.N.C.E.", "Justice", 10),
        ("Midnight City", "M83", 5),
        ("Harder: Better", "Daft Punk", 5),
    ];
    let mut state = WrappedState::default();
    for (song, artist, minutes) in plays {
        record_play(&mut state, &PlayEvent::new(song, artist, minutes), DEFAULT_TOP_N);
    }
    state
}
