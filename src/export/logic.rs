// src/export/logic.rs

use crate::core::add::log_op;
use crate::core::list::EntryFilter;
use crate::core::project;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ExportSet;
use crate::export::xlsx::export_xlsx;
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries (or, with `events`, their projected calendar events).
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output file path
    /// - `range`: `None`, `"all"` or a period such as `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, `YYYY-MM:YYYY-MM`
    ///
    /// Returns the number of exported rows.
    pub fn export(
        store: &Store,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        events: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let filter = EntryFilter {
            bounds: match range {
                Some(r) => parse_period(r)?,
                None => None,
            },
            ..EntryFilter::default()
        };

        let table = store.load()?;
        let selected = filter.apply(&table);

        if selected.is_empty() {
            warning("No entries found for selected range.");
            return Ok(0);
        }

        let set = if events {
            ExportSet::Events(selected.into_iter().map(project).collect())
        } else {
            ExportSet::Entries(selected)
        };

        match format {
            ExportFormat::Csv => export_csv(&set, path)?,
            ExportFormat::Json => export_json(&set, path)?,
            ExportFormat::Xlsx => export_xlsx(&set, path)?,
        }

        log_op(
            store,
            "export",
            file,
            &format!(
                "{} {} {}",
                set.len(),
                if events { "events" } else { "entries" },
                format.as_str()
            ),
        );

        Ok(set.len())
    }
}
