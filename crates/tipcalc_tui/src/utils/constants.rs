//! TUI spacing and sizing constants.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// The form never grows wider than this; extra width is left as margin.
pub const FORM_MAX_WIDTH: u16 = 56;

/// Height of a bordered text field (border + content + border).
pub const FIELD_HEIGHT: u16 = 3;

/// Blank rows between form rows.
pub const ROW_GAP: u16 = 1;

/// Max log lines kept for the log screen (older lines dropped).
pub const MAX_LOG_LINES: usize = 2000;

/// Frames per cursor blink phase (loop ticks every 50ms).
pub const CURSOR_BLINK_FRAMES: u64 = 10;
