// src/export/model.rs

use crate::errors::AppResult;
use crate::models::category::color_for_label;
use crate::models::{DisplayEvent, ScheduleEntry};
use crate::store::HEADER;

/// What an export writes: stored entries, or their projected calendar events.
pub enum ExportSet<'a> {
    Entries(Vec<&'a ScheduleEntry>),
    Events(Vec<DisplayEvent>),
}

const EVENT_HEADERS: [&str; 6] = ["id", "title", "start", "end", "color", "allDay"];

impl ExportSet<'_> {
    pub fn len(&self) -> usize {
        match self {
            ExportSet::Entries(v) => v.len(),
            ExportSet::Events(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Header for CSV / XLSX
    pub(crate) fn headers(&self) -> Vec<&'static str> {
        match self {
            ExportSet::Entries(_) => HEADER.to_vec(),
            ExportSet::Events(_) => EVENT_HEADERS.to_vec(),
        }
    }

    /// Rows as strings, in header order.
    pub(crate) fn rows(&self) -> Vec<Vec<String>> {
        match self {
            ExportSet::Entries(v) => v.iter().map(|e| entry_to_row(e)).collect(),
            ExportSet::Events(v) => v.iter().map(event_to_row).collect(),
        }
    }

    /// Display color of each row, used to tint spreadsheet rows.
    pub(crate) fn row_colors(&self) -> Vec<String> {
        match self {
            ExportSet::Entries(v) => v
                .iter()
                .map(|e| color_for_label(&e.category).to_string())
                .collect(),
            ExportSet::Events(v) => v.iter().map(|e| e.color.clone()).collect(),
        }
    }

    pub(crate) fn to_json(&self) -> AppResult<String> {
        let json = match self {
            ExportSet::Entries(v) => serde_json::to_string_pretty(v)?,
            ExportSet::Events(v) => serde_json::to_string_pretty(v)?,
        };
        Ok(json)
    }
}

fn entry_to_row(e: &ScheduleEntry) -> Vec<String> {
    vec![
        e.id.clone(),
        e.owner_name.clone(),
        e.start_date.clone(),
        e.end_date.clone(),
        e.category.clone(),
        e.description.clone(),
        e.progress_percent.map(|p| p.to_string()).unwrap_or_default(),
        e.memo.clone().unwrap_or_default(),
    ]
}

fn event_to_row(e: &DisplayEvent) -> Vec<String> {
    vec![
        e.id.clone(),
        e.title.clone(),
        e.start.clone(),
        e.end.clone(),
        e.color.clone(),
        e.all_day.to_string(),
    ]
}
