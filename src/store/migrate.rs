//! Schema detection and upgrade of data files.
//!
//! Version 1 files have no schema line and no `id` column; the dashboard
//! variant adds `progress_percent` and `memo`, and the oldest files use the
//! Korean column names of the spreadsheet tool (`이름,시작일,종료일,유형,내용`).
//! Version 2 files start with `#rteamcal-schema=2` and always carry all
//! eight columns.

use super::log::oplog;
use super::{CURRENT_SCHEMA_VERSION, SCHEMA_MARKER, Store};
use crate::errors::{AppError, AppResult};
use crate::models::{Category, ScheduleEntry};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::normalize_date_text;
use crate::utils::path::sibling_with_suffix;
use csv::StringRecord;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Columns every layout must provide, under their current names.
const BASE_COLUMNS: [&str; 5] = [
    "owner_name",
    "start_date",
    "end_date",
    "category",
    "description",
];

/// One CSV record as found on disk, before normalization.
/// Every column is optional so that older layouts deserialize too.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub progress_percent: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}

/// Split the schema line off `content`.
///
/// Returns the schema version (1 when the marker is absent) and the CSV body.
pub(crate) fn detect_version(content: &str) -> AppResult<(u32, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(rest) = content.strip_prefix(SCHEMA_MARKER) else {
        return Ok((1, content));
    };

    let (first_line, body) = rest.split_once('\n').unwrap_or((rest, ""));
    let version: u32 = first_line
        .trim()
        .parse()
        .map_err(|_| AppError::Migration(format!("unreadable schema line: {first_line}")))?;

    if version > CURRENT_SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "data file has schema v{version}, this build supports up to v{CURRENT_SCHEMA_VERSION}"
        )));
    }

    Ok((version, body))
}

fn canonical_column(name: &str) -> &str {
    match name {
        "이름" => "owner_name",
        "시작일" => "start_date",
        "종료일" => "end_date",
        "유형" => "category",
        "내용" => "description",
        other => other,
    }
}

/// Map header names to the current column names and reject layouts that do
/// not carry the base columns, so that a foreign file is never read as
/// blank rows (and then saved over).
pub(crate) fn canonical_headers(raw: &StringRecord, version: u32) -> AppResult<StringRecord> {
    let mapped: StringRecord = raw.iter().map(|h| canonical_column(h.trim())).collect();

    let mut missing: Vec<&str> = BASE_COLUMNS
        .into_iter()
        .filter(|col| !mapped.iter().any(|h| h == *col))
        .collect();
    if version >= 2 && !mapped.iter().any(|h| h == "id") {
        missing.insert(0, "id");
    }

    if missing.is_empty() {
        Ok(mapped)
    } else {
        Err(AppError::Migration(format!(
            "unrecognized header '{}' (missing: {})",
            raw.iter().collect::<Vec<_>>().join(","),
            missing.join(", ")
        )))
    }
}

fn parse_progress(raw: Option<String>) -> Option<u8> {
    let s = raw?;
    let s = s.trim().trim_end_matches('%');
    if s.is_empty() {
        return None;
    }
    // spreadsheet tools often save integers as "40.0"
    let v: f64 = s.parse().ok()?;
    (0.0..=100.0).contains(&v).then(|| v.round() as u8)
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

/// Id for a row that has none: a name-based UUID over the row position and
/// its content, so every load of the same file hands out the same ids.
fn derived_id(index: usize, e: &ScheduleEntry) -> String {
    let name = format!(
        "{index}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}",
        e.owner_name, e.start_date, e.end_date, e.category, e.description
    );
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

/// Turn the raw record at `index` into a current entry.
///
/// Dates are normalized, an empty end date takes the start date, legacy
/// category labels become current ones and missing ids are derived.
pub(crate) fn upgrade_row(index: usize, raw: RawRow) -> ScheduleEntry {
    let start_date = normalize_date_text(raw.start_date.as_deref().unwrap_or(""));
    let end_date = match non_empty(raw.end_date) {
        Some(e) => normalize_date_text(&e),
        None => start_date.clone(),
    };

    let category = raw.category.unwrap_or_default().trim().to_string();
    let category = Category::from_stored(&category)
        .map(|c| c.label().to_string())
        .unwrap_or(category);

    let mut entry = ScheduleEntry {
        id: String::new(),
        owner_name: raw.owner_name.unwrap_or_default(),
        start_date,
        end_date,
        category,
        description: raw.description.unwrap_or_default(),
        progress_percent: parse_progress(raw.progress_percent),
        memo: non_empty(raw.memo),
    };

    entry.id = match non_empty(raw.id) {
        Some(id) => id.trim().to_string(),
        None => derived_id(index, &entry),
    };
    entry
}

/// `<data>.v<n>.bak`, where a file of schema `version` is kept before it is
/// first rewritten at the current version.
pub fn backup_path(store: &Store, version: u32) -> PathBuf {
    sibling_with_suffix(store.path(), &format!("v{version}.bak"))
}

pub(crate) fn backup_original(store: &Store, version: u32) -> AppResult<PathBuf> {
    let backup = backup_path(store, version);
    fs::copy(store.path(), &backup)?;
    Ok(backup)
}

/// Result of [`run_pending_migrations`].
#[derive(Debug, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// No data file yet: nothing to migrate.
    NoFile,
    /// The file already has the current schema.
    UpToDate,
    /// The file was rewritten; the original was copied to `backup`.
    Migrated { from: u32, backup: PathBuf },
}

/// Rewrite the data file at the current schema version.
///
/// The original file is kept as `<data>.v<n>.bak` before being replaced.
pub fn run_pending_migrations(store: &Store) -> AppResult<MigrationOutcome> {
    let Some(version) = store.schema_version()? else {
        info("No data file yet, nothing to migrate.");
        return Ok(MigrationOutcome::NoFile);
    };

    if version == CURRENT_SCHEMA_VERSION {
        success(format!("Data file already at schema v{version}."));
        return Ok(MigrationOutcome::UpToDate);
    }

    warning(format!(
        "Migrating data file from schema v{version} to v{CURRENT_SCHEMA_VERSION}..."
    ));

    let table = store.load()?;

    // save() copies the old file aside before replacing it
    store.save(&table)?;
    let backup = backup_path(store, version);
    info(format!("Original saved as {}", backup.display()));

    if let Err(e) = oplog(
        store.path(),
        &format!("migrate_to_v{CURRENT_SCHEMA_VERSION}"),
        &store.path().to_string_lossy(),
        &format!("{} rows migrated from schema v{version}", table.len()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!(
        "Data file migrated to schema v{CURRENT_SCHEMA_VERSION} ({} rows).",
        table.len()
    ));

    Ok(MigrationOutcome::Migrated {
        from: version,
        backup,
    })
}
