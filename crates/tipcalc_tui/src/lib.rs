//! tipcalc-tui: interactive calculator screen.
//!
//! Theming in `theme`; layout in `layouts`; state and view in [state] and [view].
//! Run with [run_tui].

pub mod layouts;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use run::{handle_event, run_tui, run_tui_with_logs, Action};
pub use state::{Focus, Screen, TuiState};
pub use theme::Appearance;
pub use view::draw as draw_view;
