//! `tipcalc tui`: run the interactive calculator.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Result, bail};
use tipcalc_constant::app;
use tipcalc_observability::{LogSink, ObservabilityConfig, init};
use tipcalc_tui::run_tui_with_logs;
use tokio::sync::mpsc;

use crate::cli::ThemeArg;
use crate::output;
use crate::settings::Settings;

pub fn handle(
    theme: Option<ThemeArg>,
    no_round_up: bool,
    tip: Option<String>,
    verbose: bool,
) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("tipcalc tui needs an interactive terminal (TTY); use `tipcalc calc` in scripts");
    }

    let settings = Settings::load_effective()?;
    let appearance = match theme {
        Some(theme) => theme.into(),
        None => settings.appearance()?,
    };
    let mut config = settings.calculator;
    if no_round_up {
        config = config.with_round_up(false);
    }
    if let Some(tip) = tip {
        config = config.with_tip_percentage(tip);
        config.validate()?;
    }

    // Log lines → TUI log screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });
    let mut obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if verbose {
        obs_config = obs_config.with_log_level("debug");
    } else if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level("info");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Logging init failed (continuing): {e}"));
    }

    tracing::info!(version = app::VERSION, "starting {}", app::NAME);
    run_tui_with_logs(config, appearance, Some(log_rx))
}
