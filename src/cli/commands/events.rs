use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::EntryFilter;
use crate::core::project;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::models::DisplayEvent;
use crate::ui::messages::success;
use crate::utils::date::parse_period;
use std::fs;
use std::path::Path;

/// Print (or write) the calendar event feed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events { period, out, force } = cmd {
        let filter = EntryFilter {
            bounds: match period {
                Some(p) => parse_period(p)?,
                None => None,
            },
            ..EntryFilter::default()
        };

        let table = open_store(cfg).load()?;
        let events: Vec<DisplayEvent> = filter.apply(&table).into_iter().map(project).collect();
        let json = serde_json::to_string_pretty(&events)?;

        match out {
            Some(path) => {
                ensure_writable(Path::new(path), *force)?;
                fs::write(path, json)?;
                success(format!("{} events written to {}", events.len(), path));
            }
            None => println!("{json}"),
        }
    }
    Ok(())
}
