use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{EntryFilter, render_entries};
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        owner,
        category,
    } = cmd
    {
        let filter = EntryFilter {
            owner: owner.clone(),
            category: category.clone(),
            ..EntryFilter::from_period(period.as_deref())?
        };

        let table = open_store(cfg).load()?;
        let entries = filter.apply(&table);

        if entries.is_empty() {
            info("No entries for the selected period.");
            return Ok(());
        }

        print!("{}", render_entries(&entries, cfg.separator()));
        println!("\n{} of {} entries", entries.len(), table.len());
    }
    Ok(())
}
