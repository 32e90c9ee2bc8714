//! Application metadata constants

pub const NAME: &str = "tipcalc";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name for tipcalc data within the home directory
pub const DATA_DIR: &str = ".tipcalc";
/// Config file inside DATA_DIR
pub const CONFIG_FILE: &str = "config.toml";
/// Env file inside DATA_DIR (KEY=VALUE lines, loaded before the config file)
pub const ENV_FILE: &str = "env";

/// Prefix for environment overrides (TIPCALC_ROUND_UP, TIPCALC_THEME, ...)
pub const ENV_PREFIX: &str = "TIPCALC_";
