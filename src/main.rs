use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use console_connect_four::config::AppConfig;
use console_connect_four::ui::{App, SessionEnd};

/// Play Connect Four against a friend in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Show zero-based column labels and row indices
    #[arg(long)]
    debug: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let loaded = AppConfig::load_if_present(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
    if !found {
        log::warn!("config file '{}' not found, using defaults", cli.config.display());
    }
    log::debug!("using {config:?}");

    let mut app = App::new(cli.debug || config.display.debug);
    let end = app
        .run(io::stdin().lock(), io::stdout().lock())
        .context("console I/O failed")?;

    if end == SessionEnd::InputClosed {
        log::info!("no more input, exiting");
    }
    Ok(())
}
