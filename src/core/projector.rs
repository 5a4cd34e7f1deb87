//! Mapping from stored entries to calendar display events.

use crate::models::category::{Category, color_for_label};
use crate::models::{DisplayEvent, ScheduleEntry};
use crate::store::Table;
use crate::utils::date::{format_date, parse_date};
use crate::utils::entry_title;

const TIMED_FMT: &str = "%H:%M:%S";

/// Project one entry into its display event.
///
/// Half-day categories become a timed event on the start date. Everything
/// else is an all-day event whose `end` is the day after `end_date`, since
/// the calendar treats the end bound as exclusive. When `end_date` does not
/// parse, its text is passed through unshifted.
pub fn project(entry: &ScheduleEntry) -> DisplayEvent {
    let color = color_for_label(&entry.category).to_string();
    let title = entry_title(&entry.owner_name, &entry.description);

    let window = Category::from_label(&entry.category).and_then(|c| c.half_day_window());

    let (start, end, all_day) = match window {
        Some((from, to)) => (
            format!("{}T{}", entry.start_date, from.format(TIMED_FMT)),
            format!("{}T{}", entry.start_date, to.format(TIMED_FMT)),
            false,
        ),
        None => {
            let end = parse_date(&entry.end_date)
                .and_then(|d| d.succ_opt())
                .map(format_date)
                .unwrap_or_else(|| entry.end_date.clone());
            (entry.start_date.clone(), end, true)
        }
    };

    DisplayEvent {
        id: entry.id.clone(),
        title,
        start,
        end,
        color,
        all_day,
    }
}

/// Project every row, keeping the table order.
pub fn project_all(table: &Table) -> Vec<DisplayEvent> {
    table.entries().iter().map(project).collect()
}
