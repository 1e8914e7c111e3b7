//! The five-color theme palette and circular theme cycling.

use egui::Color32;
use once_cell::sync::Lazy;

use crate::ui::color;

/// A five-color palette applied to every visual element of a clock window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color32,
    pub primary: Color32,
    pub secondary: Color32,
    pub text: Color32,
    pub accent: Color32,
}

/// The hardcoded theme table, in cycling order.
pub static THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    let theme = |name, background, primary, secondary, text, accent| {
        let hex = |s| color::parse_hex(s).expect("invalid palette hex literal");
        Theme {
            name,
            background: hex(background),
            primary: hex(primary),
            secondary: hex(secondary),
            text: hex(text),
            accent: hex(accent),
        }
    };
    vec![
        theme("Midnight", "#121212", "#4FC3F7", "#FF4081", "#E0E0E0", "#7C4DFF"),
        theme("Carbon", "#0A0A0A", "#00BCD4", "#FF5252", "#F5F5F5", "#E040FB"),
        theme("Neon", "#1A1A1A", "#18FFFF", "#FF6E40", "#FFFFFF", "#B388FF"),
        theme("Graphite", "#212121", "#64FFDA", "#FF1744", "#EEEEEE", "#651FFF"),
        theme("Slate", "#263238", "#80CBC4", "#FF8A65", "#ECEFF1", "#9575CD"),
    ]
});

impl Default for Theme {
    fn default() -> Self {
        THEMES[0].clone()
    }
}

impl Theme {
    /// The theme following this one in the table, wrapping circularly.
    ///
    /// A theme that is not in the table (edited or unlisted) falls back to
    /// the first entry rather than erroring.
    pub fn next(&self) -> Theme {
        match THEMES.iter().position(|t| t == self) {
            Some(i) => THEMES[(i + 1) % THEMES.len()].clone(),
            None => THEMES[0].clone(),
        }
    }
}
