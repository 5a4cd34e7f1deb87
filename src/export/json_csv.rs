// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::ExportSet;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(set: &ExportSet<'_>, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    fs::write(path, set.to_json()?)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with a header row.
pub(crate) fn export_csv(set: &ExportSet<'_>, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(set.headers())?;
    for row in set.rows() {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
