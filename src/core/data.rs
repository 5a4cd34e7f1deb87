use crate::errors::AppResult;
use crate::models::Category;
use crate::store::{CURRENT_SCHEMA_VERSION, Store, Table};
use crate::utils::date::parse_date;
use std::collections::HashMap;

/// Summary printed by `data --info`.
#[derive(Debug)]
pub struct DataInfo {
    pub path: String,
    pub exists: bool,
    pub schema_version: Option<u32>,
    pub rows: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

/// One problem found by `data --check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: String,
    pub message: String,
}

pub struct DataLogic;

impl DataLogic {
    pub fn info(store: &Store) -> AppResult<DataInfo> {
        let schema_version = store.schema_version()?;
        let table = store.load()?;

        let starts = table.entries().iter().filter_map(|e| e.start());
        let ends = table
            .entries()
            .iter()
            .filter_map(|e| e.end().or_else(|| e.start()));

        Ok(DataInfo {
            path: store.path().display().to_string(),
            exists: store.exists(),
            schema_version,
            rows: table.len(),
            first_date: starts.min().map(|d| d.to_string()),
            last_date: ends.max().map(|d| d.to_string()),
        })
    }

    /// Inspect the table for rows the projector can only render degraded.
    pub fn check(table: &Table) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for e in table.entries() {
            let mut push = |message: String| {
                issues.push(Issue {
                    id: e.id.clone(),
                    message,
                })
            };

            if parse_date(&e.start_date).is_none() {
                push(format!("unparseable start date '{}'", e.start_date));
            }
            if parse_date(&e.end_date).is_none() {
                push(format!("unparseable end date '{}'", e.end_date));
            }
            if e.has_inverted_range() {
                push(format!(
                    "end date {} before start date {}",
                    e.end_date, e.start_date
                ));
            }
            if Category::from_label(&e.category).is_none() {
                push(format!(
                    "unknown category '{}' (default color used)",
                    e.category
                ));
            }

            *seen.entry(e.id.as_str()).or_default() += 1;
        }

        for (id, count) in seen {
            if count > 1 {
                issues.push(Issue {
                    id: id.to_string(),
                    message: format!("id used by {count} rows"),
                });
            }
        }

        issues
    }

    pub fn needs_migration(info: &DataInfo) -> bool {
        matches!(info.schema_version, Some(v) if v < CURRENT_SCHEMA_VERSION)
    }
}
