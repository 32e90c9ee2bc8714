//! Shared utilities for the calculator TUI.
//!
//! - **[constants]**: Spacing and sizing constants.
//! - **[layout]**: Rect padding, centering, right-aligned rows, scroll clamp.

mod constants;
mod layout;

pub use constants::*;
pub use layout::{
    centered_column,
    horizontal_padding,
    padding,
    right_aligned_row,
    scroll_with_buffer,
};
