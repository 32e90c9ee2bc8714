//! Header strip: bold title left, status with a colored dot right.

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::style::{background_style, border_style, text_style};
use crate::theme::TipPalette;
use crate::utils::{horizontal_padding, right_aligned_row};

/// Default status when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Color of the status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Ok,
    Notice,
    Error,
}

pub fn header_line(
    title: &str,
    status: &str,
    tone: StatusTone,
    palette: &TipPalette,
    width: u16,
) -> Line<'static> {
    let dot = match tone {
        StatusTone::Ok => palette.success,
        StatusTone::Notice => palette.warning,
        StatusTone::Error => palette.danger,
    };
    right_aligned_row(
        title,
        text_style(palette.text).add_modifier(Modifier::BOLD),
        vec![
            Span::styled("● ", text_style(dot)),
            Span::styled(status.to_string(), text_style(palette.text_muted)),
        ],
        width,
    )
}

/// Draw the header: title line over a bottom border.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &TipPalette,
    title: &str,
    status: &str,
    tone: StatusTone,
) {
    let inner = horizontal_padding(area);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.status_bar_background));
    let line = header_line(title, status, tone, palette, inner.width);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(line).style(background_style(palette.status_bar_background)),
        Rect { height: 1, ..inner },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_spans_width() {
        let palette = TipPalette::tip_dark();
        let line = header_line("Custom Tip Calculator", "Ready", StatusTone::Ok, &palette, 60);
        assert_eq!(line.width(), 60);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("Custom Tip Calculator"));
        assert!(text.ends_with("● Ready"));
    }

    #[test]
    fn error_tone_uses_danger() {
        let palette = TipPalette::tip_dark();
        let line = header_line("t", "bad", StatusTone::Error, &palette, 20);
        let dot = line.spans.iter().find(|s| s.content.starts_with('●')).unwrap();
        assert_eq!(dot.style, text_style(palette.danger));
    }
}
