use crate::errors::{AppError, AppResult};
use crate::models::{EntryPatch, ScheduleEntry};

/// In-memory copy of the data file.
///
/// Row order is the order of the file and the order of every listing;
/// entries are addressed by their stable id, never by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    entries: Vec<ScheduleEntry>,
    /// Schema version the rows were read from (current version for new tables).
    pub(crate) source_version: u32,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            source_version: super::CURRENT_SCHEMA_VERSION,
        }
    }

    pub(crate) fn from_entries(entries: Vec<ScheduleEntry>, source_version: u32) -> Self {
        Self {
            entries,
            source_version,
        }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source_version(&self) -> u32 {
        self.source_version
    }

    /// Add one row at the end.
    pub fn append(&mut self, entry: ScheduleEntry) -> &ScheduleEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> AppResult<&ScheduleEntry> {
        self.position(id)
            .map(|i| &self.entries[i])
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))
    }

    /// Resolve a full id or a unique id prefix to the full id.
    pub fn resolve_id(&self, id_or_prefix: &str) -> AppResult<String> {
        let needle = id_or_prefix.trim();
        if needle.is_empty() {
            return Err(AppError::EntryNotFound(id_or_prefix.to_string()));
        }
        if self.position(needle).is_some() {
            return Ok(needle.to_string());
        }

        let matches: Vec<&ScheduleEntry> = self
            .entries
            .iter()
            .filter(|e| e.id.starts_with(needle))
            .collect();

        match matches.as_slice() {
            [] => Err(AppError::EntryNotFound(needle.to_string())),
            [one] => Ok(one.id.clone()),
            many => Err(AppError::AmbiguousId(needle.to_string(), many.len())),
        }
    }

    /// Overwrite the patched fields of the row with `id`.
    /// Returns the names of the fields that were written.
    pub fn update(&mut self, id: &str, patch: &EntryPatch) -> AppResult<Vec<&'static str>> {
        let idx = self
            .position(id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        Ok(patch.apply_to(&mut self.entries[idx]))
    }

    /// Remove the row with `id`; the remaining rows keep their relative order.
    pub fn remove(&mut self, id: &str) -> AppResult<ScheduleEntry> {
        let idx = self
            .position(id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        Ok(self.entries.remove(idx))
    }
}
