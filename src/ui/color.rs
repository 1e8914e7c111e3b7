//! Hex color parsing/formatting and linear RGB blending.

use egui::Color32;

use crate::error::{AppError, Result};

/// Parse a `#RRGGBB` hex literal (leading `#` optional) into a [`Color32`].
pub fn parse_hex(s: &str) -> Result<Color32> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(AppError::InvalidColor(s.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        u8::from_str_radix(&hex[range], 16).map_err(|_| AppError::InvalidColor(s.to_owned()))
    };
    Ok(Color32::from_rgb(
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?,
    ))
}

/// Format a color back into the `#rrggbb` form the palette is authored in.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Linearly interpolate each RGB channel independently, truncating toward
/// zero.
///
/// The ratio is not validated: values outside [0, 1] extrapolate past the
/// endpoints, with each channel saturating at the u8 bounds.
pub fn blend(a: Color32, b: Color32, ratio: f64) -> Color32 {
    let channel = |x: u8, y: u8| -> u8 {
        let v = f64::from(x) + (f64::from(y) - f64::from(x)) * ratio;
        v.clamp(0.0, 255.0) as u8
    };
    Color32::from_rgb(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
    )
}
