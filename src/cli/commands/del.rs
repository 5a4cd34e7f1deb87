use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::entry_title;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = open_store(cfg);
        let target = DeleteLogic::find(&store, id)?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete {} {} ({}..{})? This action is irreversible.",
            target.short_id(),
            entry_title(&target.owner_name, &target.description),
            target.start_date,
            target.end_date
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let removed = DeleteLogic::apply(&store, &target.id)?;
        success(format!("Entry {} has been deleted.", removed.short_id()));
    }

    Ok(())
}
