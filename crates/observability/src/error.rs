//! Error types for observability crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber is already installed, or the filter did not parse.
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),
}
