use crate::core::add::{check_progress, log_op, resolve_category};
use crate::errors::{AppError, AppResult};
use crate::models::{EntryPatch, ScheduleEntry};
use crate::store::Store;
use crate::ui::messages::warning;

pub struct EditLogic;

impl EditLogic {
    /// Apply `patch` to the entry addressed by `id_or_prefix`.
    ///
    /// The id is resolved against the current file content, so an entry
    /// deleted in the meantime yields `EntryNotFound` instead of touching
    /// another row.
    pub fn apply(
        store: &Store,
        id_or_prefix: &str,
        mut patch: EntryPatch,
    ) -> AppResult<ScheduleEntry> {
        if patch.is_empty() {
            return Err(AppError::Other(
                "Nothing to update: pass at least one field option.".into(),
            ));
        }
        check_progress(patch.progress_percent.flatten())?;

        if let Some(c) = &patch.category {
            patch.category = Some(resolve_category(c));
        }

        let mut table = store.load()?;
        let id = table.resolve_id(id_or_prefix)?;
        let changed = table.update(&id, &patch)?;

        let updated = table.get(&id)?.clone();
        if updated.has_inverted_range() {
            warning(format!(
                "End date {} is before start date {}: saved as entered.",
                updated.end_date, updated.start_date
            ));
        }

        store.save(&table)?;

        log_op(store, "edit", &id, &format!("updated {}", changed.join(", ")));

        Ok(updated)
    }
}
