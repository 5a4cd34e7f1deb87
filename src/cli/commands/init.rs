use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{Store, Table, log};
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - an empty data file with the current header, if none exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.as_deref(), cli.test)?;
    let data_path = cfg.data_path();

    println!("⚙️  Initializing rTeamcal…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data file   : {}", data_path.display());

    let store = Store::new(&data_path);
    if store.exists() {
        info("Data file already present, left untouched.");
    } else {
        store.save(&Table::new())?;
        success(format!("Data file created at {}", data_path.display()));
    }

    // internal log (non blocking)
    if let Err(e) = log::oplog(
        &data_path,
        "init",
        &data_path.to_string_lossy(),
        "Data file initialized",
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 rTeamcal initialization completed!");
    Ok(())
}
