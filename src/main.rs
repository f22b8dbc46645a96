use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;

use taskdeck::commands::{
    LsOptions, cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show, cmd_ls,
    cmd_view,
};
use taskdeck::logging;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Browse large task lists one page at a time")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive task list
    #[command(visible_alias = "v")]
    View {
        /// Start with this search applied
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print tasks without the TUI
    Ls {
        /// Only tasks matching this search
        #[arg(short, long)]
        search: Option<String>,

        /// Stop after this many tasks
        #[arg(short = 'n', long, value_parser = parse_limit)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one configuration value
    Get {
        /// Dotted key, e.g. source.kind
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Dotted key, e.g. page_size
        key: String,
        value: String,
    },
    /// Print the config file path
    Path,
}

fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a number", s)),
    }
}

/// File logging, only for the TUI; the other commands leave no files behind
fn init_logging() -> Option<logging::LoggingGuard> {
    match logging::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} failed to set up logging: {}", "warning:".yellow(), e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match cli.command {
        Commands::View { .. } => init_logging(),
        _ => None,
    };

    let result = match cli.command {
        Commands::View { search } => cmd_view(search).await,
        Commands::Ls {
            search,
            limit,
            json,
        } => {
            cmd_ls(LsOptions {
                search,
                limit,
                json,
            })
            .await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Path => cmd_config_path(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("25"), Ok(25));
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("-1").is_err());
        assert!(parse_limit("many").is_err());
    }
}
