//! RGBA colors with float channels in `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};

/// RGBA color; channels are nominally in `[0, 1]` but not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    /// Opaque cyan.
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    /// Opaque magenta.
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From 8-bit channels, opaque.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(channel_from_u8(r), channel_from_u8(g), channel_from_u8(b))
    }

    /// Channels scaled to `0..=255`, clamped and rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Component-wise interpolation, alpha included. `t` is not clamped.
    pub fn lerp(self, to: Color, t: f32) -> Color {
        Color::rgba(
            self.r + (to.r - self.r) * t,
            self.g + (to.g - self.g) * t,
            self.b + (to.b - self.b) * t,
            self.a + (to.a - self.a) * t,
        )
    }

    /// `1 - c` on the color channels; alpha is kept.
    pub fn inverted(self) -> Color {
        Color::rgba(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Relative luminance with Rec. 709 weights.
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Gray with the same luminance; alpha is kept.
    pub fn grayscale(self) -> Color {
        let l = self.luminance();
        Color::rgba(l, l, l, self.a)
    }
}

fn channel_from_u8(v: u8) -> f32 {
    f32::from(v) / 255.0
}

fn channel_to_u8(v: f32) -> u8 {
    // NaN clamps to 0 through the `as` cast
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`; the `#` is optional.
///
/// # Errors
/// Returns `Decode` for any other length or a non-hex digit.
///
/// # Examples
/// ```
/// use u_toolkit::color::{hex_to_color, Color};
/// assert_eq!(hex_to_color("#ff0000").unwrap(), Color::RED);
/// assert_eq!(hex_to_color("0f0").unwrap(), Color::GREEN);
/// ```
pub fn hex_to_color(hex: &str) -> Result<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(UtilError::Decode(format!("invalid hex color {hex:?}")));
    }
    let byte = |i: usize| -> Result<u8> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| UtilError::Decode(format!("invalid hex color {hex:?}: {e}")))
    };
    let nibble = |i: usize| -> Result<u8> {
        u8::from_str_radix(&digits[i..i + 1], 16)
            .map(|n| n * 17)
            .map_err(|e| UtilError::Decode(format!("invalid hex color {hex:?}: {e}")))
    };
    let [r, g, b, a] = match digits.len() {
        3 => [nibble(0)?, nibble(1)?, nibble(2)?, 255],
        6 => [byte(0)?, byte(2)?, byte(4)?, 255],
        8 => [byte(0)?, byte(2)?, byte(4)?, byte(6)?],
        n => {
            return Err(UtilError::Decode(format!(
                "hex color {hex:?} has {n} digits, expected 3, 6 or 8"
            )))
        }
    };
    Ok(Color::rgba(
        channel_from_u8(r),
        channel_from_u8(g),
        channel_from_u8(b),
        channel_from_u8(a),
    ))
}

/// Lowercase `#rrggbb`, or `#rrggbbaa` with `with_alpha`.
pub fn color_to_hex(color: Color, with_alpha: bool) -> String {
    let [r, g, b, a] = color.to_rgba8();
    if with_alpha {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Returns `(h, s, v)` with hue in degrees `[0, 360)` and s, v in `[0, 1]`.
/// Grays report hue 0.
pub fn rgb_to_hsv(color: Color) -> (f32, f32, f32) {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    let delta = max - min;
    let hue = if delta == 0.0 {
        0.0
    } else if max == color.r {
        60.0 * ((color.g - color.b) / delta).rem_euclid(6.0)
    } else if max == color.g {
        60.0 * ((color.b - color.r) / delta + 2.0)
    } else {
        60.0 * ((color.r - color.g) / delta + 4.0)
    };
    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    (hue.rem_euclid(360.0), saturation, max)
}

/// Opaque color from hue (degrees, wrapped), saturation and value.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Color::rgb(r + m, g + m, b + m)
}
