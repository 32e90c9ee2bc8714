//! `tipcalc config` subcommands.

use anyhow::{Result, bail};
use tipcalc_constant::app;

use crate::cli::ConfigAction;
use crate::output;
use crate::settings::{self, Settings};

pub fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Path => path(),
        ConfigAction::Init { force } => init(force),
    }
}

fn show() -> Result<()> {
    let path = settings::config_path()?;
    let effective = Settings::load_effective()?;
    let overrides = env_overrides();

    if output::is_json() {
        let data = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "settings": effective,
            "env_overrides": overrides,
        });
        output::data("config", &data);
        return Ok(());
    }

    output::header(&format!("{} settings", app::NAME));
    if path.exists() {
        output::dim(&format!("File: {}", path.display()));
    } else {
        output::dim(&format!(
            "File: {} (not created; run 'tipcalc config init')",
            path.display()
        ));
    }

    let calc = &effective.calculator;
    let mut table = output::table("Setting", "Value");
    output::table_row(&mut table, "calculator.round_up", &calc.round_up.to_string());
    output::table_row(
        &mut table,
        "calculator.tip_percentage",
        calc.tip_percentage.as_deref().unwrap_or("-"),
    );
    output::table_row(
        &mut table,
        "calculator.invalid_input",
        calc.invalid_input.as_str(),
    );
    output::table_row(&mut table, "ui.theme", &effective.ui.theme);
    println!("{table}");

    if !overrides.is_empty() {
        output::dim(&format!("Environment overrides: {}", overrides.join(", ")));
    }
    Ok(())
}

fn path() -> Result<()> {
    let path = settings::config_path()?;
    if output::is_json() {
        let data = serde_json::json!({ "path": path.display().to_string(), "exists": path.exists() });
        output::data("path", &data);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

fn init(force: bool) -> Result<()> {
    let path = settings::config_path()?;
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Settings::default().save(&path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    output::success(&format!("Wrote {}", path.display()));
    Ok(())
}

/// Names of set `TIPCALC_*` variables, sorted.
fn env_overrides() -> Vec<String> {
    let mut names: Vec<String> = std::env::vars()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(app::ENV_PREFIX))
        .collect();
    names.sort();
    names
}
