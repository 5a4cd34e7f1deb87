//! Path utilities: expand ~, derive sibling files of the data file.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<data>.log`, the internal operation log stored beside the data file.
pub fn log_file_for(data_file: &Path) -> PathBuf {
    sibling_with_suffix(data_file, "log")
}

/// `<data>.<suffix>` keeping the original extension, e.g. `team.csv.log`.
pub fn sibling_with_suffix(data_file: &Path, suffix: &str) -> PathBuf {
    let mut name = data_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "rteamcal.csv".into());
    name.push(".");
    name.push(suffix);
    data_file.with_file_name(name)
}
