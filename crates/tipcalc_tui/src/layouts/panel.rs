//! Bordered panel layout: outer area, inner padded content area, theme-backed block.

use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders},
};

use super::style::{background_style, border_style, text_style};
use crate::theme::TipPalette;
use crate::utils::{padding, HORIZONTAL_PADDING};

#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Full area of the panel (including border).
    pub outer: Rect,
    /// Inner area after border and padding (where content goes).
    pub inner: Rect,
}

impl PanelLayout {
    /// Bordered panel with horizontal padding inside the border.
    pub fn bordered(area: Rect) -> Self {
        let after_border = padding(area, 1, 1);
        Self {
            outer: area,
            inner: padding(after_border, HORIZONTAL_PADDING, 0),
        }
    }
}

pub fn block_for_panel(title: &str, palette: &TipPalette) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {title} "), text_style(palette.text_muted)))
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background))
}
