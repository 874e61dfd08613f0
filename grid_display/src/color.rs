// color.rs - Scalar-to-color mapping for heatmap rendering

//! Colors used by the render surface and the cold-to-hot ramp that turns a
//! continuous cell value into an [`Rgb`] triple.

use serde::{Deserialize, Serialize};

/// An opaque 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GRID_GRAY: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(c: Rgb) -> Self {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }
}

impl From<egui::Color32> for Rgb {
    fn from(c: egui::Color32) -> Self {
        Rgb::new(c.r(), c.g(), c.b())
    }
}

/// Hue, in degrees, that `value` is mapped to: 240 (blue) at 0 down to 0 (red) at 1.
pub fn value_to_hue(value: f64) -> f64 {
    (1.0 - value) * 240.0
}

/// Maps a normalized scalar onto the blue-to-red ramp at full saturation and
/// half lightness.
///
/// `value` is expected in `[0, 1]` and is not clamped here; callers holding
/// values from an unbounded range must clamp before calling.
pub fn map_to_color(value: f64) -> Rgb {
    hsl_to_rgb(value_to_hue(value), 100.0, 50.0)
}

/// Converts HSL (hue in degrees, saturation and lightness in percent) to RGB.
///
/// Channels are rounded to the nearest integer in `[0, 255]`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue / 360.0;
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let (r, g, b) = if s == 0.0 {
        // achromatic
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
