//! Shared constants for tipcalc.

pub mod app;
pub mod labels;
