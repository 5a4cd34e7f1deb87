//! Durable schedule table backed by one delimited file.
//!
//! Every save rewrites the whole file through a temporary sibling that is
//! atomically renamed over the target.

pub mod log;
pub mod migrate;
pub mod table;

pub use migrate::{MigrationOutcome, run_pending_migrations};
pub use table::Table;

use crate::errors::AppResult;
use migrate::{RawRow, backup_original, canonical_headers, detect_version, upgrade_row};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const CURRENT_SCHEMA_VERSION: u32 = 2;
pub(crate) const SCHEMA_MARKER: &str = "#rteamcal-schema=";

/// Column order of the current schema.
pub const HEADER: [&str; 8] = [
    "id",
    "owner_name",
    "start_date",
    "end_date",
    "category",
    "description",
    "progress_percent",
    "memo",
];

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Schema version of the file on disk, `None` when there is no file.
    pub fn schema_version(&self) -> AppResult<Option<u32>> {
        if !self.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let (version, _) = detect_version(&content)?;
        Ok(Some(version))
    }

    /// Read the table, or return an empty one when the file does not exist.
    ///
    /// Older layouts are upgraded in memory; the file itself is only
    /// rewritten by the next save. A header without the base columns is an
    /// error, never an empty or blank table.
    pub fn load(&self) -> AppResult<Table> {
        if !self.exists() {
            return Ok(Table::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let (version, body) = detect_version(&content)?;
        if body.trim().is_empty() {
            return Ok(Table::from_entries(Vec::new(), version));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(body.as_bytes());

        let headers = canonical_headers(rdr.headers()?, version)?;
        rdr.set_headers(headers);

        let mut entries = Vec::new();
        for (index, record) in rdr.deserialize::<RawRow>().enumerate() {
            entries.push(upgrade_row(index, record?));
        }

        Ok(Table::from_entries(entries, version))
    }

    /// Serialize the full table, replacing any prior content.
    ///
    /// A table read from an older schema upgrades the file; the old file is
    /// first copied to `<data>.v<n>.bak`.
    pub fn save(&self, table: &Table) -> AppResult<()> {
        if table.source_version < CURRENT_SCHEMA_VERSION && self.exists() {
            backup_original(self, table.source_version)?;
        }

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        writeln!(tmp, "{SCHEMA_MARKER}{CURRENT_SCHEMA_VERSION}")?;

        {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            wtr.write_record(HEADER)?;
            for entry in table.entries() {
                wtr.serialize(entry)?;
            }
            wtr.flush()?;
        }

        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
