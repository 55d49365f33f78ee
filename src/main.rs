//! Orbdeck - console-style terminal dashboard simulation
//!
//! Boot animation, tile menu with keyboard navigation, placeholder app
//! windows, and a one-way shutdown sequence. All state lives in `AppCore`;
//! the TUI frontend only collects events and draws.

mod core;
mod frontend;
mod theme;
mod ui;

use crate::core::startup::TICK_INTERVAL;
use crate::core::AppCore;
use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use frontend::{Frontend, TuiFrontend};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(ClapParser)]
#[command(name = "orbdeck")]
#[command(about = "Console-style terminal dashboard simulation", long_about = None)]
struct Cli {
    /// Animation tick interval in milliseconds
    #[arg(long, default_value_t = TICK_INTERVAL.as_millis() as u64)]
    tick_ms: u64,

    /// Skip the boot animation and open the dashboard directly
    #[arg(long)]
    skip_animation: bool,

    /// Log file path (TUI apps can't log to stdout)
    #[arg(long, value_name = "FILE", default_value = "orbdeck.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Use RUST_LOG to control the level, e.g. RUST_LOG=debug
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("Failed to open log file {:?}", cli.log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    tracing::info!(tick_ms = cli.tick_ms, "starting orbdeck");

    let tick_interval = Duration::from_millis(cli.tick_ms);
    let mut app = AppCore::new(tick_interval, cli.skip_animation, Instant::now());

    let mut tui = TuiFrontend::new().context("Failed to initialize terminal frontend")?;
    tui.set_poll_timeout(tick_interval);

    // Restore the terminal even when the loop errors out
    let result = run(&mut app, &mut tui);
    tui.cleanup().context("Failed to restore terminal")?;

    tracing::info!("orbdeck exited");
    result
}

fn run(app: &mut AppCore, frontend: &mut impl Frontend) -> Result<()> {
    while app.running {
        let now = Instant::now();
        for event in frontend.poll_events()? {
            app.handle_event(event, now);
        }
        app.update(Instant::now());
        frontend.render(app)?;
    }
    Ok(())
}
