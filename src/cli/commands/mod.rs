pub mod add;
pub mod backup;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod del;
pub mod edit;
pub mod events;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::config::Config;
use crate::store::Store;

/// Store for the data file selected by the configuration (or `--data`).
pub(crate) fn open_store(cfg: &Config) -> Store {
    Store::new(cfg.data_path())
}
