//! Bordered text field: label in the border, digits inside, cursor when focused.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
};

use super::style::{background_style, border_style, text_style};
use crate::theme::TipPalette;

/// Horizontal padding inside the field block (each side).
pub const FIELD_PADDING_H: u16 = 1;

/// Shown in an empty, unfocused field.
pub const FIELD_PLACEHOLDER: &str = "0";

/// Rounded block with the label as title; focused fields use the accent border.
pub fn block_for_field(label: &str, palette: &TipPalette, focused: bool) -> Block<'static> {
    let border = if focused {
        palette.border_focused
    } else {
        palette.border
    };
    let title_style = if focused {
        text_style(palette.text_accent)
    } else {
        text_style(palette.text_muted)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(border))
        .title(Span::styled(format!(" {label} "), title_style))
        .style(background_style(palette.surface_background))
        .padding(Padding::new(FIELD_PADDING_H, FIELD_PADDING_H, 0, 0))
}

/// Content line of a field. `cursor` is a byte offset into `text`; the cursor cell
/// is drawn reversed when `focused && cursor_visible`.
pub fn field_line(
    text: &str,
    cursor: usize,
    focused: bool,
    cursor_visible: bool,
    palette: &TipPalette,
) -> Line<'static> {
    let style = text_style(palette.text);
    if !focused {
        if text.is_empty() {
            return Line::from(Span::styled(FIELD_PLACEHOLDER, text_style(palette.text_placeholder)));
        }
        return Line::from(Span::styled(text.to_string(), style));
    }

    let cursor = cursor.min(text.len());
    let (before, after) = text.split_at(cursor);
    let mut chars = after.chars();
    let under = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let rest: String = chars.collect();
    let cursor_style = if cursor_visible {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    Line::from(vec![
        Span::styled(before.to_string(), style),
        Span::styled(under, cursor_style),
        Span::styled(rest, style),
    ])
}
