use crate::errors::{AppError, AppResult};
use crate::models::{Category, ScheduleEntry};
use crate::store::Store;
use crate::store::log::oplog;
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// Input for a new entry, as collected by the `add` command.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub owner_name: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub category: String,
    pub description: String,
    pub progress_percent: Option<u8>,
    pub memo: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(store: &Store, input: NewEntry) -> AppResult<ScheduleEntry> {
        check_progress(input.progress_percent)?;

        let category = resolve_category(&input.category);
        let mut entry = ScheduleEntry::new(
            &input.owner_name,
            input.start,
            input.end,
            &category,
            &input.description,
        );
        entry.progress_percent = input.progress_percent;
        entry.memo = input.memo.filter(|m| !m.is_empty());

        if entry.has_inverted_range() {
            warning(format!(
                "End date {} is before start date {}: saved as entered.",
                entry.end_date, entry.start_date
            ));
        }

        let mut table = store.load()?;
        let saved = table.append(entry).clone();
        store.save(&table)?;

        log_op(
            store,
            "add",
            &saved.id,
            &format!(
                "{} {}..{} {}",
                saved.owner_name, saved.start_date, saved.end_date, saved.category
            ),
        );

        Ok(saved)
    }
}

/// Map CLI category input to the stored label.
///
/// Known labels and codes resolve to the canonical label. Anything else is
/// kept verbatim and will render with the default color.
pub fn resolve_category(input: &str) -> String {
    match Category::from_input(input) {
        Some(c) => c.label().to_string(),
        None => {
            warning(format!(
                "Unknown category '{input}': it will be shown with the default color."
            ));
            input.trim().to_string()
        }
    }
}

pub(crate) fn check_progress(progress: Option<u8>) -> AppResult<()> {
    match progress {
        Some(p) if p > 100 => Err(AppError::InvalidProgress(p.to_string())),
        _ => Ok(()),
    }
}

/// Write an operation log line; failures only produce a warning.
pub(crate) fn log_op(store: &Store, operation: &str, target: &str, message: &str) {
    if let Err(e) = oplog(store.path(), operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
