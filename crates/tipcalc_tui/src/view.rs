//! TUI view: header (fixed top), calculator form (centered), shortcut hints (fixed bottom).

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use tipcalc_constant::labels;
use tipcalc_core::Field;

use crate::layouts::{
    background_style, block_for_field, block_for_panel, field_line, form_rows, main_splits,
    render_header, shortcut_inner_rect, shortcut_line, switch_line, text_style, HintContext,
    PanelLayout, HEADER_STATUS_READY,
};
use crate::state::{Focus, Screen, TuiState};
use crate::theme::TipPalette;
use crate::utils::{scroll_with_buffer, CURSOR_BLINK_FRAMES};

/// Draw the full TUI: calculator or log screen depending on state.screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    frame.render_widget(Block::default().style(background_style(state.palette.background)), area);
    match state.screen {
        Screen::Main => draw_main(frame, state, area),
        Screen::Logs => draw_logs(frame, state, area),
    }
}

fn draw_main(frame: &mut Frame, state: &TuiState, area: Rect) {
    let splits = main_splits(area);
    let palette = &state.palette;

    let status = if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    render_header(frame, splits.header, palette, labels::TITLE, status, state.status_tone);

    let rows = form_rows(splits.body);
    let cursor_visible = (state.frame_count / CURSOR_BLINK_FRAMES) % 2 == 0;

    draw_field(frame, state, Field::BillAmount, rows.bill_amount, cursor_visible);
    draw_field(frame, state, Field::TipPercentage, rows.tip_percentage, cursor_visible);

    let switch = switch_line(
        labels::ROUND_UP_TIP,
        state.form.round_up(),
        state.focus == Focus::RoundUp,
        palette,
        rows.round_up.width,
    );
    frame.render_widget(Paragraph::new(switch), rows.round_up);

    frame.render_widget(
        Paragraph::new(tip_amount_line(&state.form.tip_amount_text(), palette)).alignment(Alignment::Center),
        rows.tip_amount,
    );

    let context = if state.focus == Focus::RoundUp {
        HintContext::Switch
    } else {
        HintContext::Field
    };
    frame.render_widget(
        Paragraph::new(shortcut_line(palette, context)),
        shortcut_inner_rect(splits.footer),
    );
}

fn draw_field(frame: &mut Frame, state: &TuiState, field: Field, area: Rect, cursor_visible: bool) {
    if area.height == 0 {
        return;
    }
    let focused = state.focus.field() == Some(field);
    let block = block_for_field(field.label(), &state.palette, focused);
    let line = field_line(
        state.form.text(field),
        state.cursor(field),
        focused,
        cursor_visible,
        &state.palette,
    );
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// "Tip Amount: 15.0", bold.
pub fn tip_amount_line(amount: &str, palette: &TipPalette) -> Line<'static> {
    let style = text_style(palette.text).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(labels::TIP_AMOUNT, style),
        Span::styled(amount.to_string(), style.fg(crate::layouts::rgb_to_color(palette.text_accent))),
    ])
}

/// Log screen: tracing output, newest at the bottom.
fn draw_logs(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits(area);
    let layout = PanelLayout::bordered(Rect {
        height: splits.header.height + splits.body.height,
        ..area
    });
    let palette = &state.palette;
    frame.render_widget(block_for_panel("Logs", palette), layout.outer);

    let viewport = layout.inner.height as usize;
    let total = state.log_lines.len();
    state.log_scroll = scroll_with_buffer(state.log_scroll, total, viewport);
    let end = total - state.log_scroll;
    let start = end.saturating_sub(viewport);

    let style = text_style(palette.text_muted);
    let lines: Vec<Line> = state.log_lines[start..end]
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), style)))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), layout.inner);
    frame.render_widget(
        Paragraph::new(shortcut_line(palette, HintContext::Logs)),
        shortcut_inner_rect(splits.footer),
    );
}
