use crate::core::add::log_op;
use crate::errors::AppResult;
use crate::models::ScheduleEntry;
use crate::store::Store;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Look up the entry a delete request refers to, without removing it.
    pub fn find(store: &Store, id_or_prefix: &str) -> AppResult<ScheduleEntry> {
        let table = store.load()?;
        let id = table.resolve_id(id_or_prefix)?;
        Ok(table.get(&id)?.clone())
    }

    /// Remove the entry with exactly `id`.
    pub fn apply(store: &Store, id: &str) -> AppResult<ScheduleEntry> {
        let mut table = store.load()?;
        let removed = table.remove(id)?;
        store.save(&table)?;

        log_op(
            store,
            "del",
            &removed.id,
            &format!(
                "{} {}..{} {}",
                removed.owner_name, removed.start_date, removed.end_date, removed.category
            ),
        );

        Ok(removed)
    }
}
