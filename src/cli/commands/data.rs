use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::data::DataLogic;
use crate::errors::AppResult;
use crate::store::{CURRENT_SCHEMA_VERSION, run_pending_migrations};
use crate::ui::messages::{header, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Data {
        migrate,
        check,
        info: show_info,
    } = cmd
    {
        let store = open_store(cfg);

        if *migrate {
            run_pending_migrations(&store)?;
        }

        if *show_info {
            let di = DataLogic::info(&store)?;
            header("Data file");
            println!("Path           : {}", di.path);
            if !di.exists {
                println!("Status         : not created yet");
            } else {
                println!(
                    "Schema version : v{} (current v{CURRENT_SCHEMA_VERSION})",
                    di.schema_version.unwrap_or(1)
                );
                println!("Entries        : {}", di.rows);
                if let (Some(first), Some(last)) = (&di.first_date, &di.last_date) {
                    println!("Date span      : {first} .. {last}");
                }
                if DataLogic::needs_migration(&di) {
                    info("Run `rteamcal data --migrate` to upgrade the file.");
                }
            }
        }

        if *check {
            let table = store.load()?;
            let issues = DataLogic::check(&table);
            if issues.is_empty() {
                success(format!("{} entries checked, no issues found.", table.len()));
            } else {
                for issue in &issues {
                    let short = issue.id.get(..8).unwrap_or(&issue.id);
                    warning(format!("{short}: {}", issue.message));
                }
                warning(format!(
                    "{} issue(s) found in {} entries.",
                    issues.len(),
                    table.len()
                ));
            }
        }
    }

    Ok(())
}
