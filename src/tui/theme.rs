//! Theme system for TUI colors and styles
//!
//! Zone colors mirror the floor plan's cosmetic grouping; status and UI
//! colors are shared by the board and login screens.

use iocraft::prelude::Color;

use crate::api::Zone;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Zone colors (cosmetic grouping by seat id range)
    pub zone_a: Color,
    pub zone_b: Color,
    pub zone_c: Color,
    pub zone_d: Color,

    // Occupancy colors
    pub occupied: Color,
    pub selected: Color,
    pub search_match: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub countdown: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            zone_a: Color::Blue,
            zone_b: Color::Yellow,
            zone_c: Color::Red,
            zone_d: Color::Green,

            occupied: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            selected: Color::Magenta,
            search_match: Color::Yellow,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            countdown: Color::Red,
        }
    }
}

impl Theme {
    /// Get the color for a zone
    pub fn zone_color(&self, zone: Zone) -> Color {
        match zone {
            Zone::A => self.zone_a,
            Zone::B => self.zone_b,
            Zone::C => self.zone_c,
            Zone::D => self.zone_d,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
