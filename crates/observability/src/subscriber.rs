//! Global subscriber installation.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::sink_layer::sink_layer;

/// Set once this crate has installed the global subscriber.
static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install the global `tracing` subscriber.
///
/// Later calls are no-ops returning `Ok(())`; the first configuration stays in
/// effect. Fails if some other subscriber was installed first.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(config.effective_level())
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let sink = config.log_sink.clone().map(sink_layer);

    let installed = Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink)
        .try_init();
    match installed {
        Ok(()) => {
            let _ = INSTALLED.set(());
        }
        // Lost a race against a concurrent init from this crate.
        Err(_) if INSTALLED.get().is_some() => return Ok(()),
        Err(e) => return Err(ObservabilityError::InitFailed(e.to_string())),
    }

    tracing::info!(
        service.name = %config.service_name,
        console = config.enable_console,
        sink = config.log_sink.is_some(),
        "logging initialized"
    );
    Ok(())
}

/// [init] with [ObservabilityConfig::from_env].
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
