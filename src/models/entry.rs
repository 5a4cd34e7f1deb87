use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the data file: a person's scheduled time block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub owner_name: String,
    pub start_date: String, // "YYYY-MM-DD"
    pub end_date: String,   // "YYYY-MM-DD", inclusive
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub progress_percent: Option<u8>,
    #[serde(default)]
    pub memo: Option<String>,
}

impl ScheduleEntry {
    /// Build a new entry with a freshly generated id.
    /// A missing end date defaults to the start date.
    pub fn new(
        owner_name: &str,
        start: NaiveDate,
        end: Option<NaiveDate>,
        category: &str,
        description: &str,
    ) -> Self {
        let end = end.unwrap_or(start);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_name: owner_name.to_string(),
            start_date: date::format_date(start),
            end_date: date::format_date(end),
            category: category.to_string(),
            description: description.to_string(),
            progress_percent: None,
            memo: None,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        date::parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        date::parse_date(&self.end_date)
    }

    /// First 8 characters of the id, as shown in listings.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }

    /// True when both dates parse and the end precedes the start.
    pub fn has_inverted_range(&self) -> bool {
        matches!((self.start(), self.end()), (Some(s), Some(e)) if e < s)
    }

    /// Whether the inclusive `[start, end]` span touches `[from, to]`.
    /// An unparseable end date is treated as a single-day entry.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        let Some(start) = self.start() else {
            return false;
        };
        let end = self.end().unwrap_or(start).max(start);
        start <= to && end >= from
    }
}

/// Partial update applied by `edit`. `None` leaves a field untouched;
/// `progress_percent: Some(None)` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub owner_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub progress_percent: Option<Option<u8>>,
    pub memo: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.owner_name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.progress_percent.is_none()
            && self.memo.is_none()
    }

    /// Apply the patch in place; returns the names of the changed fields.
    pub fn apply_to(&self, entry: &mut ScheduleEntry) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if let Some(v) = &self.owner_name {
            entry.owner_name = v.clone();
            changed.push("owner_name");
        }
        if let Some(v) = self.start_date {
            entry.start_date = date::format_date(v);
            changed.push("start_date");
        }
        if let Some(v) = self.end_date {
            entry.end_date = date::format_date(v);
            changed.push("end_date");
        }
        if let Some(v) = &self.category {
            entry.category = v.clone();
            changed.push("category");
        }
        if let Some(v) = &self.description {
            entry.description = v.clone();
            changed.push("description");
        }
        if let Some(v) = self.progress_percent {
            entry.progress_percent = v;
            changed.push("progress_percent");
        }
        if let Some(v) = &self.memo {
            entry.memo = Some(v.clone());
            changed.push("memo");
        }

        changed
    }
}
