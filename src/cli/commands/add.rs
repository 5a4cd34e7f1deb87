use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Register a new schedule entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        owner,
        start,
        end,
        category,
        description,
        progress,
        memo,
    } = cmd
    {
        //
        // 1. Parse dates (start mandatory, end defaults to start)
        //
        let start_d = date::require_date(start)?;
        let end_d = end.as_deref().map(date::require_date).transpose()?;

        //
        // 2. Category (default from config)
        //
        let category = category
            .clone()
            .unwrap_or_else(|| cfg.default_category.clone());

        //
        // 3. Execute logic
        //
        let store = open_store(cfg);
        let entry = AddLogic::apply(
            &store,
            NewEntry {
                owner_name: owner.clone(),
                start: start_d,
                end: end_d,
                category,
                description: description.clone(),
                progress_percent: *progress,
                memo: memo.clone(),
            },
        )?;

        success(format!(
            "Entry added: {} [{}] {} {}..{}",
            entry.id, entry.owner_name, entry.category, entry.start_date, entry.end_date
        ));
    }

    Ok(())
}
