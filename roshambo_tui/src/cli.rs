//! Command-line interface for the roshambo TUI.

use clap::Parser;
use roshambo::Theme;
use std::path::PathBuf;

/// Roshambo - rock-paper-scissors in the terminal.
#[derive(Parser, Debug)]
#[command(name = "roshambo_tui")]
#[command(about = "Play rock-paper-scissors against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (created on first theme toggle)
    #[arg(long, default_value = "roshambo.toml")]
    pub settings: PathBuf,

    /// Override the saved theme for this run (dark or light)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Animation delay in milliseconds before a round resolves
    #[arg(long, default_value_t = roshambo::ANIMATION_DURATION.as_millis() as u64)]
    pub delay_ms: u64,

    /// Seed for the computer's choices (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}
