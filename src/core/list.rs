use crate::errors::AppResult;
use crate::models::category::color_for_label;
use crate::models::{Category, ScheduleEntry};
use crate::store::Table;
use crate::utils::colors::{colorize_optional, paint_hex, swatch};
use crate::utils::date;
use crate::utils::table::{Column, Table as TextTable};
use chrono::NaiveDate;

/// Row filter shared by `list`, `events` and `export`.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Inclusive bounds; `None` keeps every row, including undated ones.
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub owner: Option<String>,
    pub category: Option<String>,
}

impl EntryFilter {
    /// Build a filter from a period expression (`None` → current month).
    pub fn from_period(period: Option<&str>) -> AppResult<Self> {
        let bounds = match period {
            Some(p) => date::parse_period(p)?,
            None => Some(date::current_month()?),
        };
        Ok(Self {
            bounds,
            ..Self::default()
        })
    }

    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        if let Some((from, to)) = self.bounds
            && !entry.overlaps(from, to)
        {
            return false;
        }
        if let Some(owner) = &self.owner
            && !entry.owner_name.eq_ignore_ascii_case(owner.trim())
        {
            return false;
        }
        if let Some(cat) = &self.category {
            let wanted = Category::from_input(cat)
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| cat.trim().to_string());
            if entry.category != wanted {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, table: &'a Table) -> Vec<&'a ScheduleEntry> {
        table.entries().iter().filter(|e| self.matches(e)).collect()
    }
}

/// Render entries as a terminal table, in file order.
pub fn render_entries(entries: &[&ScheduleEntry], separator: char) -> String {
    let mut t = TextTable::new(vec![
        Column::new("ID", 8),
        Column::new("NAME", 6),
        Column::new("START", 10),
        Column::new("END", 10),
        Column::new("CATEGORY", 10),
        Column::new("DESCRIPTION", 12),
        Column::new("PROG", 4),
    ])
    .with_separator(separator);

    for e in entries {
        let color = color_for_label(&e.category);
        let progress = e
            .progress_percent
            .map(|p| format!("{p}%"))
            .unwrap_or_else(|| "--".to_string());

        t.add_row(vec![
            e.short_id().to_string(),
            colorize_optional(&e.owner_name),
            e.start_date.clone(),
            e.end_date.clone(),
            format!("{} {}", swatch(color), paint_hex(color, &e.category)),
            colorize_optional(&e.description),
            colorize_optional(&progress),
        ]);
    }

    t.render()
}
