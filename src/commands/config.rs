//! Configuration commands
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Change one value and save
//! - `config path`: Print the config file location

use owo_colors::OwoColorize;
use serde_json::json;

use super::print_json;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let token_configured = Config::api_token().is_some();

    if json {
        return print_json(&json!({
            "source": {
                "kind": config.source.kind.to_string(),
                "path": config.source.tasks_path().display().to_string(),
                "base_url": config.source.base_url,
                "timeout_secs": config.source.timeout_secs,
            },
            "page_size": config.page_size,
            "prefetch_rows": config.prefetch_rows,
            "search_debounce_ms": config.search_debounce_ms,
            "dark_mode": config.dark_mode,
            "api_token_configured": token_configured,
            "config_file": Config::config_path().to_string_lossy(),
        }));
    }

    println!("{}\n", "Configuration:".cyan().bold());
    for key in crate::config::VALID_KEYS {
        let value = config.get(key)?;
        let value = if value.is_empty() {
            "(not set)".dimmed().to_string()
        } else {
            value
        };
        println!("  {}: {}", key.cyan(), value);
    }
    let token = if token_configured {
        "configured".green().to_string()
    } else {
        "not set".dimmed().to_string()
    };
    println!("  {}: {}", "TASKDECK_API_TOKEN".cyan(), token);
    println!(
        "\n{} {}",
        "Config file:".dimmed(),
        Config::config_path().display()
    );

    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value and save
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::info!(key, "config updated");
    println!("Set {} = {}", key.cyan(), value);
    Ok(())
}

/// Print the config file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path().display());
    Ok(())
}
