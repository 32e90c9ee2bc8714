//! Calculator theme: semantic color palette (surfaces, borders, text, states).
//!
//! ```ignore
//! use tipcalc_tui::theme::{Appearance, TipPalette};
//!
//! let palette = TipPalette::for_appearance(Appearance::Light);
//! let (r, g, b) = palette.text.tuple();
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::TipPalette;
pub use rgb::Rgb;
