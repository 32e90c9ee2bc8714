//! Command dispatch.

pub mod calc;
pub mod config;
pub mod tui;

use anyhow::Result;
use tipcalc_observability::{ObservabilityConfig, init, init_from_env};

use crate::cli::{Cli, Command};
use crate::output;

pub fn handle(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Command::Tui {
        theme: None,
        no_round_up: false,
        tip: None,
    });
    match command {
        Command::Tui {
            theme,
            no_round_up,
            tip,
        } => tui::handle(theme, no_round_up, tip, cli.verbose),
        Command::Calc {
            bill,
            tip,
            no_round_up,
        } => {
            init_console_logging(cli.verbose);
            calc::handle(bill, tip, no_round_up)
        }
        Command::Config { action } => {
            init_console_logging(cli.verbose);
            config::handle(action)
        }
    }
}

/// Tracing to stderr for one-shot commands; `--verbose` forces debug.
fn init_console_logging(verbose: bool) {
    let result = if verbose {
        init(ObservabilityConfig::from_env().with_log_level("debug"))
    } else {
        init_from_env()
    };
    if let Err(e) = result {
        output::warning(&format!("Logging init failed (continuing): {e}"));
    }
}
