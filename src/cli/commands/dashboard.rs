use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::render_dashboard;
use crate::core::list::EntryFilter;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::parse_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { period, owner } = cmd {
        let filter = EntryFilter {
            bounds: match period {
                Some(p) => parse_period(p)?,
                None => None,
            },
            owner: owner.clone(),
            category: None,
        };

        let table = open_store(cfg).load()?;
        let entries = filter.apply(&table);

        if entries.is_empty() {
            info("No entries to show.");
            return Ok(());
        }

        header("Progress dashboard");
        print!("{}", render_dashboard(&entries, cfg.dashboard_bar_width));
    }
    Ok(())
}
