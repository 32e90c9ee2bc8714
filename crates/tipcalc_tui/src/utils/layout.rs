//! Layout helpers for Rects and lines.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::utils::constants::*;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    padding(area, HORIZONTAL_PADDING, 0)
}

/// Apply padding on all four sides.
#[inline]
pub fn padding(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal.saturating_mul(2)),
        height: area.height.saturating_sub(vertical.saturating_mul(2)),
    }
}

/// Horizontally centered column at most `max_width` wide.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let left = (area.width - width) / 2;
    Rect {
        x: area.x.saturating_add(left),
        y: area.y,
        width,
        height: area.height,
    }
}

/// Single line with left label, flexible spacing, and right-aligned value spans.
pub fn right_aligned_row(
    label: &str,
    label_style: Style,
    value: Vec<Span<'static>>,
    width: u16,
) -> Line<'static> {
    let label_w = label.width();
    let value_w: usize = value.iter().map(|s| s.content.width()).sum();
    let gap = (width as usize).saturating_sub(label_w + value_w).max(1);

    let mut spans = Vec::with_capacity(value.len() + 2);
    spans.push(Span::styled(label.to_string(), label_style));
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(value);
    Line::from(spans)
}

/// Clamp a scroll offset so the last line can still sit at the bottom of the viewport.
pub fn scroll_with_buffer(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    let max_offset = content_height.saturating_sub(viewport_height);
    offset.min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_shrinks_both_axes() {
        let r = padding(Rect::new(0, 0, 20, 10), 2, 1);
        assert_eq!(r, Rect::new(2, 1, 16, 8));
    }

    #[test]
    fn padding_saturates_on_tiny_area() {
        let r = padding(Rect::new(0, 0, 3, 1), 2, 1);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }

    #[test]
    fn centered_column_caps_width() {
        let r = centered_column(Rect::new(0, 0, 100, 10), 40);
        assert_eq!(r.width, 40);
        assert_eq!(r.x, 30);
    }

    #[test]
    fn centered_column_narrow_area() {
        let r = centered_column(Rect::new(5, 0, 20, 10), 40);
        assert_eq!(r, Rect::new(5, 0, 20, 10));
    }

    #[test]
    fn right_aligned_row_fills_width() {
        let line = right_aligned_row("Label", Style::default(), vec![Span::raw("ON")], 20);
        assert_eq!(line.width(), 20);
    }

    #[test]
    fn scroll_clamped_to_content() {
        assert_eq!(scroll_with_buffer(50, 30, 10), 20);
        assert_eq!(scroll_with_buffer(5, 30, 10), 5);
        assert_eq!(scroll_with_buffer(5, 3, 10), 0);
    }
}
