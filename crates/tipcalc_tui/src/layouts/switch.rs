//! Round-up switch row: label left, pill-shaped toggle right.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::style::{background_style, text_style};
use crate::theme::TipPalette;
use crate::utils::right_aligned_row;

pub fn switch_spans(on: bool, palette: &TipPalette) -> Vec<Span<'static>> {
    let knob = text_style(palette.switch_knob).add_modifier(Modifier::BOLD);
    if on {
        let track = background_style(palette.switch_on);
        vec![
            Span::styled(" ON ", knob.patch(track)),
            Span::styled("●", knob.patch(track)),
        ]
    } else {
        let track = background_style(palette.switch_off);
        vec![
            Span::styled("●", knob.patch(track)),
            Span::styled(" OFF", text_style(palette.text_muted).patch(track)),
        ]
    }
}

pub fn switch_line(label: &str, on: bool, focused: bool, palette: &TipPalette, width: u16) -> Line<'static> {
    let label_style = if focused {
        text_style(palette.text_accent).add_modifier(Modifier::BOLD)
    } else {
        text_style(palette.text)
    };
    right_aligned_row(label, label_style, switch_spans(on, palette), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn on_and_off_render_differently() {
        let palette = TipPalette::tip_light();
        let on = switch_line("Round up tip?", true, false, &palette, 30);
        let off = switch_line("Round up tip?", false, false, &palette, 30);
        assert!(plain(&on).ends_with(" ON ●"));
        assert!(plain(&off).ends_with("● OFF"));
        assert_eq!(on.width(), 30);
        assert_eq!(off.width(), 30);
    }

    #[test]
    fn focused_label_is_bold() {
        let palette = TipPalette::tip_dark();
        let line = switch_line("Round up tip?", true, true, &palette, 30);
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }
}
