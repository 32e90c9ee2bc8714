//! TUI state: the calculator form, focus, per-field cursors, status, log screen.
//!
//! [TuiState] holds everything the view needs to render. The form is the single
//! source of truth for field text and the tip; the state only adds cursors and
//! chrome. Changes published by the form mark the screen for redraw.

use std::time::{Duration, Instant};

use tipcalc_core::{Field, FormEvent, TipConfig, TipForm, TipSnapshot};
use tokio::sync::watch;

use crate::layouts::StatusTone;
use crate::theme::{Appearance, TipPalette};
use crate::utils::MAX_LOG_LINES;

/// Transient status lines clear after this long.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Logs,
}

/// Focusable controls, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    BillAmount,
    TipPercentage,
    RoundUp,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::BillAmount => Focus::TipPercentage,
            Focus::TipPercentage => Focus::RoundUp,
            Focus::RoundUp => Focus::BillAmount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::BillAmount => Focus::RoundUp,
            Focus::TipPercentage => Focus::BillAmount,
            Focus::RoundUp => Focus::TipPercentage,
        }
    }

    /// The text field behind this control, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::BillAmount => Some(Field::BillAmount),
            Focus::TipPercentage => Some(Field::TipPercentage),
            Focus::RoundUp => None,
        }
    }
}

#[derive(Debug)]
pub struct TuiState {
    pub form: TipForm,
    /// Subscription to the form; drained once per loop iteration.
    form_rx: watch::Receiver<TipSnapshot>,
    pub focus: Focus,
    /// Cursor (byte offset) in the bill amount field.
    pub bill_cursor: usize,
    /// Cursor (byte offset) in the tip percentage field.
    pub tip_cursor: usize,
    pub appearance: Appearance,
    pub palette: TipPalette,
    /// Status text for the header right side; empty means "Ready".
    pub status: String,
    pub status_tone: StatusTone,
    pub status_set_at: Option<Instant>,
    /// Incremented each draw for cursor blink.
    pub frame_count: u64,
    /// When true, next loop iteration draws; cleared after draw.
    pub needs_redraw: bool,
    pub screen: Screen,
    /// Log lines (tracing output). Newest at end.
    pub log_lines: Vec<String>,
    /// Lines scrolled up from the bottom of the log screen.
    pub log_scroll: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(TipConfig::default(), Appearance::default())
    }
}

impl TuiState {
    pub fn new(config: TipConfig, appearance: Appearance) -> Self {
        let form = TipForm::new(config);
        let form_rx = form.subscribe();
        let bill_cursor = form.bill_amount().len();
        let tip_cursor = form.tip_percentage().len();
        Self {
            form,
            form_rx,
            focus: Focus::BillAmount,
            bill_cursor,
            tip_cursor,
            appearance,
            palette: TipPalette::for_appearance(appearance),
            status: String::new(),
            status_tone: StatusTone::Ok,
            status_set_at: None,
            frame_count: 0,
            needs_redraw: true,
            screen: Screen::Main,
            log_lines: Vec::new(),
            log_scroll: 0,
        }
    }

    /// Pull the latest form snapshot if it changed; clamps cursors and requests a redraw.
    /// Returns whether anything changed.
    pub fn sync_form(&mut self) -> bool {
        if !self.form_rx.has_changed().unwrap_or(false) {
            return false;
        }
        let snapshot = self.form_rx.borrow_and_update().clone();
        self.bill_cursor = self.bill_cursor.min(snapshot.bill_amount.len());
        self.tip_cursor = self.tip_cursor.min(snapshot.tip_percentage.len());
        self.needs_redraw = true;
        true
    }

    pub fn cursor(&self, field: Field) -> usize {
        match field {
            Field::BillAmount => self.bill_cursor,
            Field::TipPercentage => self.tip_cursor,
        }
    }

    fn cursor_mut(&mut self, field: Field) -> &mut usize {
        match field {
            Field::BillAmount => &mut self.bill_cursor,
            Field::TipPercentage => &mut self.tip_cursor,
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Move focus; the cursor of a newly focused field goes to its end.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if let Some(field) = focus.field() {
            let len = self.form.text(field).len();
            *self.cursor_mut(field) = len;
        }
        self.needs_redraw = true;
    }

    /// Enter: next field from the bill amount, done from the tip percentage
    /// (focus the switch), toggle on the switch.
    pub fn submit(&mut self) {
        match self.focus {
            Focus::BillAmount | Focus::TipPercentage => self.focus_next(),
            Focus::RoundUp => self.toggle_round_up(),
        }
    }

    pub fn toggle_round_up(&mut self) {
        let on = !self.form.round_up();
        self.form.apply(FormEvent::RoundUpChanged(on));
        self.needs_redraw = true;
    }

    /// Insert text at the cursor of the focused field. The whole edit is
    /// rejected (status shown) when the result would not be digits-only.
    pub fn input_insert_str(&mut self, s: &str) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let cursor = self.cursor(field);
        let mut next = self.form.text(field).to_string();
        next.insert_str(cursor, s);
        if self.edit_field(field, next) {
            *self.cursor_mut(field) = cursor + s.len();
        }
    }

    pub fn input_insert(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.input_insert_str(c.encode_utf8(&mut buf));
    }

    /// Delete the character before the cursor.
    pub fn input_backspace(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let cursor = self.cursor(field);
        if cursor == 0 {
            return;
        }
        let mut next = self.form.text(field).to_string();
        next.remove(cursor - 1);
        if self.edit_field(field, next) {
            *self.cursor_mut(field) = cursor - 1;
        }
    }

    /// Delete the character at the cursor.
    pub fn input_delete(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let cursor = self.cursor(field);
        let mut next = self.form.text(field).to_string();
        if cursor >= next.len() {
            return;
        }
        next.remove(cursor);
        self.edit_field(field, next);
    }

    /// Clear the focused field (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        if let Some(field) = self.focus.field() {
            self.edit_field(field, String::new());
            *self.cursor_mut(field) = 0;
        }
    }

    pub fn input_cursor_left(&mut self) {
        if let Some(field) = self.focus.field() {
            let c = self.cursor_mut(field);
            *c = c.saturating_sub(1);
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_right(&mut self) {
        if let Some(field) = self.focus.field() {
            let len = self.form.text(field).len();
            let c = self.cursor_mut(field);
            *c = (*c + 1).min(len);
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_home(&mut self) {
        if let Some(field) = self.focus.field() {
            *self.cursor_mut(field) = 0;
            self.needs_redraw = true;
        }
    }

    pub fn input_cursor_end(&mut self) {
        if let Some(field) = self.focus.field() {
            let len = self.form.text(field).len();
            *self.cursor_mut(field) = len;
            self.needs_redraw = true;
        }
    }

    /// Reset the form to its configured defaults and focus the bill amount.
    pub fn reset(&mut self) {
        self.form.apply(FormEvent::Reset);
        self.set_focus(Focus::BillAmount);
        self.tip_cursor = self.form.tip_percentage().len();
        self.set_status("Reset", StatusTone::Notice);
    }

    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggled();
        self.palette = TipPalette::for_appearance(self.appearance);
        self.set_status(format!("Theme: {}", self.appearance.as_str()), StatusTone::Notice);
    }

    /// Show a transient status in the header; cleared after [STATUS_TIMEOUT].
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = text.into();
        self.status_tone = tone;
        self.status_set_at = Some(Instant::now());
        self.needs_redraw = true;
    }

    /// Clear the status once it is older than [STATUS_TIMEOUT] at `now`.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(set_at) = self.status_set_at
            && now.duration_since(set_at) > STATUS_TIMEOUT
        {
            self.status.clear();
            self.status_tone = StatusTone::Ok;
            self.status_set_at = None;
            self.needs_redraw = true;
        }
    }

    pub fn toggle_logs(&mut self) {
        self.screen = match self.screen {
            Screen::Main => Screen::Logs,
            Screen::Logs => Screen::Main,
        };
        self.needs_redraw = true;
    }

    /// Append a log line. Drops oldest if over capacity.
    pub fn push_log_line(&mut self, line: String) {
        self.log_lines.push(line);
        if self.log_lines.len() > MAX_LOG_LINES {
            self.log_lines.drain(0..self.log_lines.len() - MAX_LOG_LINES);
        }
        if self.screen == Screen::Logs {
            self.needs_redraw = true;
        }
    }

    pub fn log_scroll_up(&mut self, delta: usize) {
        self.log_scroll = self.log_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn log_scroll_down(&mut self, delta: usize) {
        self.log_scroll = self.log_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }

    fn edit_field(&mut self, field: Field, next: String) -> bool {
        let event = match field {
            Field::BillAmount => FormEvent::BillAmountChanged(next),
            Field::TipPercentage => FormEvent::TipPercentageChanged(next),
        };
        let accepted = self.form.apply(event);
        if !accepted {
            self.set_status(format!("{}: digits only", field.label()), StatusTone::Error);
        }
        self.needs_redraw = true;
        accepted
    }
}
