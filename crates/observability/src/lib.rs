//! tipcalc observability: one place to set up `tracing` for the CLI and the TUI.
//!
//! - `EnvFilter` from [ObservabilityConfig::log_level], `TIPCALC_LOG` or `RUST_LOG`
//! - optional fmt layer on stderr (off while the TUI owns the terminal)
//! - optional [LogSink] that receives each event as one formatted line
//!
//! ```no_run
//! use tipcalc_observability::{init, ObservabilityConfig};
//!
//! init(ObservabilityConfig::from_env().with_console(false))?;
//! tracing::info!("ready");
//! # Ok::<(), tipcalc_observability::ObservabilityError>(())
//! ```

pub mod config;
pub mod error;
pub mod sink_layer;
pub mod subscriber;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use subscriber::{init, init_from_env};
