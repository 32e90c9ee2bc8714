//! CLI entry point for tipcalc.

mod cli;
mod commands;
mod output;
mod settings;

use std::path::Path;

use clap::Parser;
use tipcalc_constant::app;

use crate::cli::Cli;

/// Load env files before reading settings. dotenvy never overrides variables
/// that are already set, so the shell wins over the project `.env`, which wins
/// over `~/.tipcalc/env`.
fn load_env_files() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir: &Path = &cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
    }
    if let Ok(data_dir) = settings::data_dir() {
        let global = data_dir.join(app::ENV_FILE);
        if global.exists() {
            let _ = dotenvy::from_path(&global);
        }
    }
}

fn main() {
    load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
