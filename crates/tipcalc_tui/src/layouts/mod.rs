//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]**: Header / body / footer, and the form rows inside the body.
//! - **[head]**: Title and status strip.
//! - **[field]**: Bordered digit field with cursor.
//! - **[switch]**: Round-up toggle row.
//! - **[panel]**: Bordered panel (log screen).
//! - **[shortcut]**: Footer hint line.
//! - **[style]**: Palette [crate::theme::Rgb] to ratatui styles.

mod field;
mod head;
mod panel;
mod shortcut;
mod split;
mod style;
mod switch;

pub use field::{block_for_field, field_line, FIELD_PADDING_H, FIELD_PLACEHOLDER};
pub use head::{header_line, render_header, StatusTone, HEADER_STATUS_READY};
pub use panel::{block_for_panel, PanelLayout};
pub use shortcut::{shortcut_hint, shortcut_inner_rect, shortcut_line, HintContext};
pub use split::{form_rows, main_splits, vertical_split, FormRows, MainSplits, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use style::{background_style, border_style, rgb_to_color, text_style};
pub use switch::{switch_line, switch_spans};
