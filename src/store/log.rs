use crate::errors::AppResult;
use crate::utils::path::log_file_for;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::Path;

/// One line of the internal operation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line to `<data>.log`.
pub fn oplog(data_file: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let path = log_file_for(data_file);
    let is_new = !path.exists();

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);

    wtr.serialize(LogRecord {
        // Timestamp locale, ISO 8601
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;
    Ok(())
}

/// Read every log line, oldest first. A missing log is an empty log.
pub fn read_log(data_file: &Path) -> AppResult<Vec<LogRecord>> {
    let path = log_file_for(data_file);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(&path)?;
    let mut out = Vec::new();
    for r in rdr.deserialize() {
        out.push(r?);
    }
    Ok(out)
}
