//! TUI run loop: terminal setup, event handling, draw.
//!
//! Terminal events are read on a dedicated thread and drained here, so log
//! lines keep flowing while the user is idle.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tipcalc_core::TipConfig;
use tokio::sync::mpsc as tokio_mpsc;

use crate::layouts::StatusTone;
use crate::state::{Focus, Screen, TuiState};
use crate::theme::Appearance;
use crate::view;

const TICK: Duration = Duration::from_millis(50);

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
    CopyTip,
}

/// Run the calculator screen without a log feed.
pub fn run_tui(config: TipConfig, appearance: Appearance) -> anyhow::Result<()> {
    run_tui_with_logs(config, appearance, None)
}

/// Run the calculator screen. If `log_rx` is provided, its lines fill the log screen (Ctrl+D).
pub fn run_tui_with_logs(
    config: TipConfig,
    appearance: Appearance,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let mut state = TuiState::new(config, appearance);
    tracing::info!(theme = appearance.as_str(), "calculator screen started");
    let result = run_loop(&mut terminal, &mut state, log_rx);
    let restored = restore_terminal(&mut terminal);

    result.and(restored)
}

fn enter_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Every step runs even if an earlier one fails; raw mode always goes off.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    let left = execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    disable_raw_mode()?;
    left?;
    cursor?;
    Ok(())
}

/// Terminal events read on a background thread until stopped or dropped.
struct EventReader {
    rx: mpsc::Receiver<Event>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl EventReader {
    fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = std::thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                match event::poll(TICK) {
                    Ok(true) => {
                        if let Ok(ev) = event::read()
                            && tx.send(ev).is_err()
                        {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => std::thread::sleep(TICK),
                }
            }
        });
        Self {
            rx,
            stop,
            handle: Some(handle),
        }
    }

    fn try_recv(&self) -> Result<Event, mpsc::TryRecvError> {
        self.rx.try_recv()
    }

    /// Signal the thread and wait for it; it exits within one poll tick, so no
    /// keystroke is read after the terminal is handed back.
    fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let mut events = EventReader::spawn();

    let mut last_blink_phase = 0;
    loop {
        if let Some(rx) = log_rx.as_mut() {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_log_line(l.to_string());
                }
            }
        }
        state.sync_form();
        state.expire_status(Instant::now());

        state.frame_count = state.frame_count.wrapping_add(1);
        let blink_phase = state.frame_count / crate::utils::CURSOR_BLINK_FRAMES;
        if blink_phase != last_blink_phase {
            last_blink_phase = blink_phase;
            state.needs_redraw = true;
        }

        if state.needs_redraw {
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        match events.try_recv() {
            Ok(ev) => match handle_event(state, ev) {
                Action::Continue => {}
                Action::Quit => break,
                Action::CopyTip => copy_tip_to_clipboard(state),
            },
            Err(mpsc::TryRecvError::Empty) => std::thread::sleep(TICK),
            Err(mpsc::TryRecvError::Disconnected) => break,
        }
    }
    events.stop();
    tracing::info!("calculator screen closed");
    Ok(())
}

/// Apply one terminal event to the state.
pub fn handle_event(state: &mut TuiState, ev: Event) -> Action {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Paste(text) => {
            if state.screen == Screen::Main {
                state.input_insert_str(text.trim());
            }
            Action::Continue
        }
        Event::Resize(_, _) => {
            state.needs_redraw = true;
            Action::Continue
        }
        _ => Action::Continue,
    }
}

fn handle_key(state: &mut TuiState, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('d') if ctrl => state.toggle_logs(),
        KeyCode::Char('q') if !ctrl => return Action::Quit,
        KeyCode::Esc if state.screen == Screen::Logs => state.toggle_logs(),
        KeyCode::Esc => return Action::Quit,
        _ if state.screen == Screen::Logs => handle_log_key(state, key.code),
        KeyCode::Char('r') if ctrl => state.reset(),
        KeyCode::Char('t') if ctrl => state.toggle_appearance(),
        KeyCode::Char('u') if ctrl => state.input_clear_line(),
        KeyCode::Char('y') if ctrl => return Action::CopyTip,
        KeyCode::Tab | KeyCode::Down => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.focus_prev(),
        KeyCode::Enter => state.submit(),
        KeyCode::Char(' ') if state.focus == Focus::RoundUp => state.toggle_round_up(),
        KeyCode::Left if state.focus == Focus::RoundUp => state.form.set_round_up(false),
        KeyCode::Right if state.focus == Focus::RoundUp => state.form.set_round_up(true),
        KeyCode::Char(c) if !ctrl => state.input_insert(c),
        KeyCode::Backspace => state.input_backspace(),
        KeyCode::Delete => state.input_delete(),
        KeyCode::Left => state.input_cursor_left(),
        KeyCode::Right => state.input_cursor_right(),
        KeyCode::Home => state.input_cursor_home(),
        KeyCode::End => state.input_cursor_end(),
        _ => {}
    }
    Action::Continue
}

fn handle_log_key(state: &mut TuiState, code: KeyCode) {
    match code {
        KeyCode::Up => state.log_scroll_up(1),
        KeyCode::Down => state.log_scroll_down(1),
        KeyCode::PageUp => state.log_scroll_up(10),
        KeyCode::PageDown => state.log_scroll_down(10),
        KeyCode::End => state.log_scroll = 0,
        _ => {}
    }
}

/// Copy the current tip amount to the system clipboard (Ctrl+Y).
fn copy_tip_to_clipboard(state: &mut TuiState) {
    let text = state.form.tip_amount_text();
    match cli_clipboard::set_contents(text.clone()) {
        Ok(()) => state.set_status(format!("Copied {text}"), StatusTone::Notice),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            state.set_status("Clipboard unavailable", StatusTone::Error);
        }
    }
}
