//! Row storage for encoded stats.
//!
//! The [`RowStore`] trait decouples session orchestration from the on-disk
//! format. [`CsvRowStore`] keeps a header plus a single data row in a CSV
//! file; tests use an in-memory store instead.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::codec::HEADER;
use crate::io::config::write_atomic;

/// Storage for one encoded stats row.
pub trait RowStore {
    /// Return the stored row, or `None` when nothing has been saved yet.
    fn read(&self) -> Result<Option<Vec<String>>>;

    /// Replace the stored row.
    fn write(&mut self, row: &[String]) -> Result<()>;
}

/// CSV file holding a header row and one data row.
#[derive(Debug, Clone)]
pub struct CsvRowStore {
    path: PathBuf,
}

impl CsvRowStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowStore for CsvRowStore {
    fn read(&self) -> Result<Option<Vec<String>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "stats file missing");
            return Ok(None);
        }
        // Rows written by older versions may carry fewer fields.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        // Hand-edited files may hold invalid UTF-8; such bytes become U+FFFD.
        let record = match reader.byte_records().next() {
            Some(record) => record.with_context(|| format!("read {}", self.path.display()))?,
            None => {
                debug!(path = %self.path.display(), "stats file has no data row");
                return Ok(None);
            }
        };
        let row: Vec<String> = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        debug!(path = %self.path.display(), fields = row.len(), "stats row loaded");
        Ok(Some(row))
    }

    fn write(&mut self, row: &[String]) -> Result<()> {
        debug!(path = %self.path.display(), fields = row.len(), "writing stats row");
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer.write_record(HEADER).context("encode csv header")?;
        writer.write_record(row).context("encode csv row")?;
        let buf = writer
            .into_inner()
            .map_err(|err| anyhow!("flush csv buffer: {}", err))?;
        write_atomic(&self.path, &buf)
    }
}
