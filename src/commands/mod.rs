//! Command implementations behind the `taskdeck` subcommands

mod config;
mod ls;
mod view;

pub use config::{cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show};
pub use ls::{LsOptions, cmd_ls, collect_tasks};
pub use view::cmd_view;

use crate::config::Config;
use crate::error::Result;

/// Print a JSON value to stdout with pretty formatting
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Load and validate the configuration every command starts from
fn load_config() -> Result<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}
