//! Configuration for logging

use std::sync::Arc;

/// Receives one formatted line per event (e.g. TUI log screen). Called from the
/// tracing layer, so it must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Name recorded on the startup event.
    pub service_name: String,

    /// Write formatted events to stderr.
    pub enable_console: bool,

    /// Filter directive (e.g. "info", "tipcalc_core=debug"); "warn" when unset.
    pub log_level: Option<String>,

    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "tipcalc".to_string(),
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables.
    ///
    /// Reads `TIPCALC_LOG`, then `RUST_LOG`, for the filter directive.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("TIPCALC_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|v| !v.trim().is_empty());
        Self {
            log_level,
            ..Default::default()
        }
    }

    /// Filter directive actually used by [crate::init].
    pub fn effective_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipcalc_log_wins_over_rust_log() {
        let c = ObservabilityConfig::from_lookup(|k| match k {
            "TIPCALC_LOG" => Some("debug".to_string()),
            "RUST_LOG" => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(c.effective_level(), "debug");
    }

    #[test]
    fn blank_level_falls_back_to_warn() {
        let c = ObservabilityConfig::from_lookup(|k| (k == "RUST_LOG").then(|| "  ".to_string()));
        assert!(c.log_level.is_none());
        assert_eq!(c.effective_level(), "warn");
    }

    #[test]
    fn debug_hides_sink() {
        let sink: LogSink = Arc::new(|_| {});
        let c = ObservabilityConfig::new("x").with_log_sink(sink);
        assert!(format!("{c:?}").contains("Some(LogSink)"));
    }
}
