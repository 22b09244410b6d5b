//! Contact Book - Main entry point
//!
//! Starts the interactive contact manager. State is loaded from the data
//! file at start and written back on exit.

use anyhow::Result;
use contact_book::{Application, Config, ConsoleView, Dispatcher, JsonFileRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL from .env applies to logging
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr keeps log lines apart from command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact book with data file: {}",
        config.data_file.display()
    );

    let repository = JsonFileRepository::new(&config.data_file);
    let dispatcher =
        Dispatcher::new(ConsoleView).with_birthday_window(config.birthday_window_days);

    let mut app = match Application::new(repository, dispatcher) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to load contact book: {}", e);
            return Err(e.into());
        }
    };

    app.run()?;

    info!("Contact book shutdown complete");
    Ok(())
}
