//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use tipcalc_tui::Appearance;

/// Custom tip calculator for the terminal
#[derive(Parser)]
#[command(name = "tipcalc", about, version, propagate_version = true)]
pub struct Cli {
    /// Defaults to `tui` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Appearance {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Appearance::Dark,
            ThemeArg::Light => Appearance::Light,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive calculator
    Tui {
        /// Color theme (default: [ui] theme in config, or TIPCALC_THEME)
        #[arg(long)]
        theme: Option<ThemeArg>,
        /// Start with the round-up switch off
        #[arg(long)]
        no_round_up: bool,
        /// Pre-fill the tip percentage (digits only)
        #[arg(long, value_name = "PERCENT")]
        tip: Option<String>,
    },
    /// Compute a tip once and print it
    Calc {
        /// Bill amount (digits only)
        #[arg(short, long, value_name = "DIGITS")]
        bill: String,
        /// Tip percentage (digits only; default: tip_percentage from config)
        #[arg(short, long, value_name = "DIGITS")]
        tip: Option<String>,
        /// Keep the fractional tip instead of rounding
        #[arg(long)]
        no_round_up: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings (file + environment)
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
