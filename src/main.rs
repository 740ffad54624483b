//! agreetui - Main entry point

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::stdout;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use agreetui::app::App;
use agreetui::catalog::Catalog;
use agreetui::cli::{Cli, Commands};
use agreetui::config::{AppConfig, LOG_ENV};
use agreetui::error::AgreeTuiError;
use agreetui::scenario::Scenario;

/// Initialize tracing. The wizard owns the terminal, so logs go to a file
/// when one is configured and stay quiet on stderr otherwise.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));

    let registry = tracing_subscriber::registry().with(filter);

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    let config = AppConfig::from_cli(&cli);
    init_tracing(&config)?;
    info!(resolution = %config.resolution, "agreetui starting up");

    match cli.command {
        Some(Commands::Wizard) | None => {
            run_wizard(&config)?;
        }
        Some(Commands::Payload { compact }) => {
            let store = config.build_store()?;
            let payload = store.derive_payload();
            let json = if compact {
                payload.to_json()?
            } else {
                payload.to_json_pretty()?
            };
            println!("{}", json);
        }
        Some(Commands::Validate { scenario }) => {
            let result = Scenario::load_from_file(&scenario).and_then(|s| {
                s.validate(&Catalog::builtin())
                    .context("Scenario does not match the catalog")
            });
            match result {
                Ok(()) => println!("✓ {} is a valid scenario", scenario.display()),
                Err(e) => {
                    error!("scenario validation failed: {:#}", e);
                    eprintln!("✗ {}: {:#}", scenario.display(), e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Run the interactive wizard
fn run_wizard(config: &AppConfig) -> Result<()> {
    let store = config.build_store()?;
    debug!("Initializing terminal for wizard");

    enable_raw_mode()
        .map_err(|e| AgreeTuiError::terminal(format!("Failed to enable raw mode: {}", e)))?;

    let result = with_cleanup(
        || {
            crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(
                |e| AgreeTuiError::terminal(format!("Failed to enter alternate screen: {}", e)),
            )?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| {
                AgreeTuiError::terminal(format!("Failed to create terminal: {}", e))
            })?;
            App::new(store).run(&mut terminal)
        },
        || {
            let _ = disable_raw_mode();
            let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);
        },
    );

    result.map_err(Into::into)
}

/// Run `body`, then `cleanup` whether or not `body` failed
fn with_cleanup<T>(
    body: impl FnOnce() -> agreetui::Result<T>,
    cleanup: impl FnOnce(),
) -> agreetui::Result<T> {
    let result = body();
    cleanup();
    result
}
