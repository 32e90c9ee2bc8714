//! Shortcut hint line (footer), muted, depends on what has focus.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::style::text_style;
use crate::theme::TipPalette;
use crate::utils::horizontal_padding;

/// Which hint set to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    Field,
    Switch,
    Logs,
}

pub fn shortcut_inner_rect(area: Rect) -> Rect {
    horizontal_padding(area)
}

pub fn shortcut_hint(context: HintContext) -> &'static str {
    match context {
        HintContext::Field => {
            "0-9: edit  ·  Tab/Enter: next  ·  Ctrl+U: clear  ·  Ctrl+R: reset  ·  Ctrl+Y: copy  ·  q: quit"
        }
        HintContext::Switch => {
            "Space/Enter: toggle  ·  Tab: next  ·  Ctrl+T: theme  ·  Ctrl+D: logs  ·  q: quit"
        }
        HintContext::Logs => "↑↓/PgUp/PgDn: scroll  ·  Esc/Ctrl+D: back  ·  q: quit",
    }
}

pub fn shortcut_line(palette: &TipPalette, context: HintContext) -> Line<'static> {
    Line::from(Span::styled(shortcut_hint(context), text_style(palette.text_muted)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_inner_rect_zero_width() {
        let inner = shortcut_inner_rect(Rect::new(0, 0, 0, 1));
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn hints_differ_by_context() {
        assert!(shortcut_hint(HintContext::Field).contains("Ctrl+U"));
        assert!(shortcut_hint(HintContext::Switch).contains("toggle"));
        assert!(shortcut_hint(HintContext::Logs).contains("Esc"));
    }
}
