//! `~/.tipcalc/config.toml`: calculator defaults plus UI preferences.
//!
//! ```toml
//! [calculator]
//! round_up = true
//! tip_percentage = "15"
//! invalid_input = "reject"
//!
//! [ui]
//! theme = "dark"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tipcalc_constant::app;
use tipcalc_core::TipConfig;
use tipcalc_tui::Appearance;

/// Env var overriding [UiSettings::theme].
pub const ENV_THEME: &str = "TIPCALC_THEME";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub calculator: TipConfig,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// "dark" or "light"
    pub theme: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Appearance::default().as_str().to_string(),
        }
    }
}

/// `~/.tipcalc`
pub fn data_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(app::DATA_DIR))
        .ok_or_else(|| anyhow!("could not determine home directory"))
}

/// `~/.tipcalc/config.toml`
pub fn config_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(app::CONFIG_FILE))
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.calculator.validate()?;
        settings.appearance()?;
        Ok(settings)
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Config file plus `TIPCALC_*` environment overrides.
    pub fn load_effective() -> Result<Self> {
        let path = config_path()?;
        Self::load(&path)?.apply_env(|key| std::env::var(key).ok())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.calculator = self.calculator.apply_env(&lookup)?;
        if let Some(theme) = lookup(ENV_THEME)
            && !theme.trim().is_empty()
        {
            self.ui.theme = theme.trim().to_string();
        }
        self.appearance()?;
        Ok(self)
    }

    pub fn appearance(&self) -> Result<Appearance> {
        self.ui.theme.parse::<Appearance>().map_err(|e| anyhow!(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipcalc_core::InvalidInputPolicy;

    #[test]
    fn empty_file_is_defaults() {
        let s = Settings::from_toml_str("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.appearance().unwrap(), Appearance::Dark);
    }

    #[test]
    fn parses_both_sections() {
        let s = Settings::from_toml_str(
            "[calculator]\nround_up = false\ntip_percentage = \"20\"\n\n[ui]\ntheme = \"light\"\n",
        )
        .unwrap();
        assert!(!s.calculator.round_up);
        assert_eq!(s.calculator.tip_percentage.as_deref(), Some("20"));
        assert_eq!(s.appearance().unwrap(), Appearance::Light);
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = Settings::from_toml_str("[ui]\ntheme = \"blue\"\n").unwrap_err();
        assert!(err.to_string().contains("unknown theme"));
    }

    #[test]
    fn rejects_non_digit_tip_percentage() {
        assert!(Settings::from_toml_str("[calculator]\ntip_percentage = \"1.5\"\n").is_err());
    }

    #[test]
    fn env_overrides_file() {
        let s = Settings::default()
            .apply_env(|key| match key {
                "TIPCALC_THEME" => Some("light".to_string()),
                "TIPCALC_INVALID_INPUT" => Some("zero".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(s.ui.theme, "light");
        assert_eq!(s.calculator.invalid_input, InvalidInputPolicy::Zero);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut s = Settings::default();
        s.calculator = s.calculator.with_tip_percentage("18");
        s.ui.theme = "light".to_string();
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), s);
    }

    #[test]
    fn missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }
}
