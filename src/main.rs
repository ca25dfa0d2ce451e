//! Terminal Kiosk - a single-page company showcase in the terminal
//!
//! Renders a scrolling page with a hero carousel, a tabbed about panel,
//! service cards, animated statistics, and a guided job application form.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use kiosk::config::{Config, ThemeMode};
use kiosk::constants::{APP_BINARY_NAME, APP_NAME};
use kiosk::models::SiteContent;
use kiosk::tui;

/// Terminal Kiosk - a single-page company showcase in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML content file (defaults to the built-in demo content)
    #[arg(value_name = "FILE")]
    content_path: Option<PathBuf>,

    /// Force a theme instead of following the OS preference
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Override the carousel auto-advance period in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Disable the carousel auto-advance and stat animations
    #[arg(long)]
    reduce_motion: bool,
}

/// Routes tracing output to a log file under the config directory; stderr
/// belongs to the alternate screen while the TUI runs.
fn init_logging() -> Result<()> {
    let log_dir = Config::config_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let log_file = std::fs::File::create(log_dir.join("kiosk.log"))
        .context("Failed to create log file")?;

    let filter = EnvFilter::try_from_env("KIOSK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    // Load or create default config
    let mut config = if Config::exists() {
        match Config::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config, using defaults");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(theme) = cli.theme.as_deref() {
        config.ui.theme_mode = match theme.to_lowercase().as_str() {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            "auto" => ThemeMode::Auto,
            other => {
                eprintln!("Unknown theme '{other}'. Expected dark, light, or auto.");
                eprintln!();
                eprintln!("For more options, run:");
                eprintln!("  {APP_BINARY_NAME} --help");
                std::process::exit(1);
            }
        };
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.ui.carousel_interval_ms = interval_ms.max(500);
    }
    if cli.reduce_motion {
        config.ui.reduce_motion = true;
    }

    let content = if let Some(path) = cli.content_path {
        if !path.exists() {
            eprintln!("Error: Content file not found: {}", path.display());
            eprintln!();
            eprintln!("Please provide a valid path to a TOML content file.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {APP_BINARY_NAME} showcase.toml");
            eprintln!("  {APP_BINARY_NAME}            (built-in demo content)");
            std::process::exit(1);
        }
        SiteContent::load_from(&path)?
    } else {
        SiteContent::default()
    };

    tracing::info!(company = %content.company, "starting {APP_NAME}");

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(content, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
