use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::EntryPatch;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        owner,
        start,
        end,
        category,
        description,
        progress,
        clear_progress,
        memo,
    } = cmd
    {
        let patch = EntryPatch {
            owner_name: owner.clone(),
            start_date: start.as_deref().map(date::require_date).transpose()?,
            end_date: end.as_deref().map(date::require_date).transpose()?,
            category: category.clone(),
            description: description.clone(),
            progress_percent: if *clear_progress {
                Some(None)
            } else {
                progress.map(Some)
            },
            memo: memo.clone(),
        };

        let store = open_store(cfg);
        let entry = EditLogic::apply(&store, id, patch)?;

        success(format!(
            "Entry {} updated: [{}] {} {}..{}",
            entry.short_id(),
            entry.owner_name,
            entry.category,
            entry.start_date,
            entry.end_date
        ));
    }

    Ok(())
}
