//! dialog-shell - Controlled modal dialogs for ratatui

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use dialog_shell::config::Config;
use dialog_shell::paths;
use std::path::{Path, PathBuf};

mod tui;

/// Controlled modal dialogs for terminal dashboards
#[derive(Parser)]
#[command(name = "dialog-shell")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the transactions demo (default)
    Demo,
    /// Print the resolved configuration as JSON
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Config { path: true }) => cmd_config_path(cli.config.as_deref()),
        Some(Commands::Config { path: false }) => {
            let config = load_config(cli.config.as_deref())?;
            println!("{}", config.to_json()?);
            Ok(())
        }
        Some(Commands::Demo) | None => {
            let config = load_config(cli.config.as_deref())?;
            tui::run(config)
        }
    }
}

/// Log to `<tmp>/dialog-shell.log`; tail with `tail -f`.
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let log_path = paths::log_path();
    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let dir = log_path.parent().map_or_else(std::env::temp_dir, Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(dir, paths::LOG_FILE_NAME);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

fn cmd_config_path(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(Config::default_path)
        .context("Could not determine a configuration directory")?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["dialog-shell"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_config_command() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::parse_from(["dialog-shell", "config", "--path", "--config", "/tmp/x.json"]);
        match cli.command {
            Some(Commands::Config { path }) => assert!(path),
            _ => return Err("Expected Config command".into()),
        }
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.json")));
        Ok(())
    }

    #[test]
    fn test_load_config_from_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::TempDir::new()?;
        let missing = dir.path().join("absent.json");
        assert!(load_config(Some(&missing)).is_err());
        Ok(())
    }
}
