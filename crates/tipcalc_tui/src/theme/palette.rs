//! Semantic color roles for the calculator screen.

use super::Appearance;
use super::rgb::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct TipPalette {
    // --- Surfaces
    pub background: Rgb,
    /// Input fields and the log panel.
    pub surface_background: Rgb,
    pub status_bar_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Switch
    pub switch_on: Rgb,
    pub switch_off: Rgb,
    pub switch_knob: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_accent: Rgb,

    // --- Semantic
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
}

impl TipPalette {
    pub fn tip_dark() -> Self {
        Self {
            background: Rgb(8, 8, 12),
            surface_background: Rgb(16, 17, 24),
            status_bar_background: Rgb(16, 17, 24),
            border: Rgb(28, 30, 42),
            border_focused: Rgb(99, 148, 255),
            switch_on: Rgb(99, 148, 255),
            switch_off: Rgb(61, 65, 102),
            switch_knob: Rgb(240, 242, 250),
            text: Rgb(200, 210, 245),
            text_muted: Rgb(70, 78, 110),
            text_placeholder: Rgb(70, 78, 110),
            text_accent: Rgb(99, 148, 255),
            danger: Rgb(255, 100, 120),
            success: Rgb(120, 220, 120),
            warning: Rgb(240, 185, 100),
        }
    }

    pub fn tip_light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            surface_background: Rgb(248, 248, 248),
            status_bar_background: Rgb(255, 255, 255),
            border: Rgb(229, 229, 229),
            border_focused: Rgb(122, 162, 247),
            switch_on: Rgb(122, 162, 247),
            switch_off: Rgb(203, 213, 225),
            switch_knob: Rgb(255, 255, 255),
            text: Rgb(26, 27, 38),
            text_muted: Rgb(86, 95, 137),
            text_placeholder: Rgb(161, 161, 170),
            text_accent: Rgb(122, 162, 247),
            danger: Rgb(247, 118, 142),
            success: Rgb(158, 206, 106),
            warning: Rgb(224, 175, 104),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::tip_dark(),
            Appearance::Light => Self::tip_light(),
        }
    }
}
