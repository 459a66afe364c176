pub mod config;
pub mod deadline;
pub mod emotion;
pub mod routine;

use chrono::Local;
use routinely_core::{AppStore, Config};

/// Fresh in-memory store for one command invocation.
pub(crate) fn load_store() -> Result<(Config, AppStore), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = AppStore::from_config(&config, Local::now().date_naive());
    Ok((config, store))
}
