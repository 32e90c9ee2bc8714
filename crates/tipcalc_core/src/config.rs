//! Calculator configuration: initial switch state, pre-filled tip percentage,
//! and what to do with text that is not digits-only.
//!
//! ```toml
//! round_up = true
//! tip_percentage = "15"
//! invalid_input = "reject"
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TipError};
use crate::input::{is_digits_only, Field};

/// Env var overriding [TipConfig::round_up].
pub const ENV_ROUND_UP: &str = "TIPCALC_ROUND_UP";
/// Env var overriding [TipConfig::tip_percentage].
pub const ENV_TIP_PERCENTAGE: &str = "TIPCALC_TIP_PERCENTAGE";
/// Env var overriding [TipConfig::invalid_input].
pub const ENV_INVALID_INPUT: &str = "TIPCALC_INVALID_INPUT";

/// Handling of field text that is not digits-only when it reaches the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputPolicy {
    /// Fail with [TipError::InvalidInput].
    #[default]
    Reject,
    /// Treat the field as zero.
    Zero,
}

impl InvalidInputPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Zero => "zero",
        }
    }
}

impl FromStr for InvalidInputPolicy {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" | "error" => Ok(Self::Reject),
            "zero" => Ok(Self::Zero),
            other => Err(TipError::Config(format!(
                "unknown invalid_input policy '{other}' (expected reject or zero)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipConfig {
    /// Initial state of the round-up switch.
    pub round_up: bool,
    /// Tip percentage pre-filled on start; digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_percentage: Option<String>,
    pub invalid_input: InvalidInputPolicy,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            round_up: true,
            tip_percentage: None,
            invalid_input: InvalidInputPolicy::Reject,
        }
    }
}

impl TipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round_up(mut self, round_up: bool) -> Self {
        self.round_up = round_up;
        self
    }

    pub fn with_tip_percentage(mut self, percent: impl Into<String>) -> Self {
        self.tip_percentage = Some(percent.into());
        self
    }

    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    /// Parse from TOML text and validate.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if it exists, otherwise defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply overrides from environment-like lookups (`TIPCALC_*`).
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_ROUND_UP) {
            self.round_up = parse_bool(ENV_ROUND_UP, &v)?;
        }
        if let Some(v) = lookup(ENV_TIP_PERCENTAGE) {
            let v = v.trim().to_string();
            self.tip_percentage = (!v.is_empty()).then_some(v);
        }
        if let Some(v) = lookup(ENV_INVALID_INPUT) {
            self.invalid_input = v.parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(p) = &self.tip_percentage
            && !is_digits_only(p)
        {
            return Err(TipError::Config(format!(
                "{} must be digits only, got {p:?}",
                Field::TipPercentage
            )));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(TipError::Config(format!("{key}: expected a boolean, got '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_round_up() {
        let c = TipConfig::default();
        assert!(c.round_up);
        assert!(c.tip_percentage.is_none());
        assert_eq!(c.invalid_input, InvalidInputPolicy::Reject);
    }

    #[test]
    fn parse_full_toml() {
        let c = TipConfig::from_toml_str(
            "round_up = false\ntip_percentage = \"18\"\ninvalid_input = \"zero\"\n",
        )
        .unwrap();
        assert!(!c.round_up);
        assert_eq!(c.tip_percentage.as_deref(), Some("18"));
        assert_eq!(c.invalid_input, InvalidInputPolicy::Zero);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let c = TipConfig::from_toml_str("tip_percentage = \"20\"").unwrap();
        assert!(c.round_up);
        assert_eq!(c.invalid_input, InvalidInputPolicy::Reject);
    }

    #[test]
    fn non_digit_tip_percentage_rejected() {
        let err = TipConfig::from_toml_str("tip_percentage = \"12.5\"").unwrap_err();
        assert!(matches!(err, TipError::Config(_)));
    }

    #[test]
    fn env_overrides() {
        let c = TipConfig::default()
            .apply_env(env(&[
                (ENV_ROUND_UP, "off"),
                (ENV_TIP_PERCENTAGE, " 20 "),
                (ENV_INVALID_INPUT, "ZERO"),
            ]))
            .unwrap();
        assert!(!c.round_up);
        assert_eq!(c.tip_percentage.as_deref(), Some("20"));
        assert_eq!(c.invalid_input, InvalidInputPolicy::Zero);
    }

    #[test]
    fn empty_env_tip_percentage_clears_it() {
        let c = TipConfig::default()
            .with_tip_percentage("15")
            .apply_env(env(&[(ENV_TIP_PERCENTAGE, "")]))
            .unwrap();
        assert!(c.tip_percentage.is_none());
    }

    #[test]
    fn bad_env_bool_is_config_error() {
        let err = TipConfig::default()
            .apply_env(env(&[(ENV_ROUND_UP, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_ROUND_UP));
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("reject".parse::<InvalidInputPolicy>().unwrap(), InvalidInputPolicy::Reject);
        assert_eq!("error".parse::<InvalidInputPolicy>().unwrap(), InvalidInputPolicy::Reject);
        assert!("ignore".parse::<InvalidInputPolicy>().is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = TipConfig::default()
            .with_round_up(false)
            .with_tip_percentage("18");
        config.save(&path).unwrap();
        assert_eq!(TipConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let c = TipConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(c, TipConfig::default());
    }
}
