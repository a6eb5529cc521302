//! # Colors
//!
//! ## Overview
//!
//! [Color3] stores a color as three floating point channels between `0.0` and `1.0`, and
//! provides the handful of adjustments that interfaces tend to need: lightening and darkening,
//! contrast checks, hex and integer conversions, and sampling from a [gradient].
//!
//! ```
//! use client_kit::color::Color3;
//!
//! let accent: Color3 = "#3366cc".parse().unwrap();
//! let text = if accent.is_dark() { Color3::WHITE } else { Color3::BLACK };
//!
//! assert_eq!(text, Color3::WHITE);
//! assert_eq!(accent.to_hex(true), "#3366CC");
//! ```
use std::str::FromStr;

use crate::errors::{ColorError, ColorResult};

fn check_percentage(perc: f32) -> ColorResult<()> {
    if perc >= 0.0 && perc <= 1.0 {
        Ok(())
    } else {
        Err(ColorError::InvalidPercentage(perc))
    }
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// An RGB color with channels between `0.0` and `1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color3 {
    /// The red channel.
    pub r: f32,

    /// The green channel.
    pub g: f32,

    /// The blue channel.
    pub b: f32,
}

impl Color3 {
    /// Pure black.
    pub const BLACK: Color3 = Color3 { r: 0.0, g: 0.0, b: 0.0 };

    /// Pure white.
    pub const WHITE: Color3 = Color3 { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a color from floating point channels.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Color3 { r, g, b }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color3::new(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }

    /// Create a color from an integer of the form `0xRRGGBB`.
    pub fn from_u24(value: u32) -> ColorResult<Self> {
        if value > 0xFFFFFF {
            return Err(ColorError::InvalidUInt24(value));
        }

        let r = ((value >> 16) & 0xFF) as u8;
        let g = ((value >> 8) & 0xFF) as u8;
        let b = (value & 0xFF) as u8;

        Ok(Color3::from_rgb(r, g, b))
    }

    /// Pack this color into an integer of the form `0xRRGGBB`.
    pub fn to_u24(&self) -> u32 {
        let r = u32::from(to_byte(self.r));
        let g = u32::from(to_byte(self.g));
        let b = u32::from(to_byte(self.b));

        (r << 16) | (g << 8) | b
    }

    /// Parse a color from a string of three or six hex digits, optionally prefixed with `#`.
    ///
    /// Three-digit strings are expanded by repeating each digit, so `"#fa0"` is `"#ffaa00"`.
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::MalformedHex(hex.to_string()));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            n => return Err(ColorError::InvalidHexLength(n)),
        };

        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ColorError::MalformedHex(hex.to_string()))?;

        Color3::from_u24(value)
    }

    /// Format this color as `#rrggbb`, using uppercase digits if `upper` is true.
    pub fn to_hex(&self, upper: bool) -> String {
        let (r, g, b) = (to_byte(self.r), to_byte(self.g), to_byte(self.b));

        if upper {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }

    /// Scale each channel up by `perc`, where `1.0` doubles it. Channels saturate at `1.0`.
    pub fn lighten(&self, perc: f32) -> ColorResult<Self> {
        check_percentage(perc)?;

        let scale = |c: f32| (c + c * perc).min(1.0);

        Ok(Color3::new(scale(self.r), scale(self.g), scale(self.b)))
    }

    /// Scale each channel down by `perc`, where `1.0` produces black.
    pub fn darken(&self, perc: f32) -> ColorResult<Self> {
        check_percentage(perc)?;

        let scale = |c: f32| (c - c * perc).max(0.0);

        Ok(Color3::new(scale(self.r), scale(self.g), scale(self.b)))
    }

    /// Whether this color is dark enough that light text should be drawn on top of it.
    ///
    /// This uses the YIQ brightness of the color's 8-bit channels.
    pub fn is_dark(&self) -> bool {
        let r = f32::from(to_byte(self.r));
        let g = f32::from(to_byte(self.g));
        let b = f32::from(to_byte(self.b));
        let yiq = (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0;

        return yiq < 128.0;
    }

    /// The opposite of [Color3::is_dark].
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Subtract each channel from `1.0`.
    pub fn invert(&self) -> Self {
        Color3::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b)
    }

    /// Convert this color to a grey of the same perceived luminance.
    pub fn greyscale(&self) -> Self {
        let val = self.r * 0.3 + self.g * 0.59 + self.b * 0.11;

        Color3::new(val, val, val)
    }

    /// Linearly interpolate between this color and `other`.
    pub fn lerp(&self, other: &Color3, t: f32) -> Self {
        Color3::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

impl FromStr for Color3 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color3::from_hex(s)
    }
}

/// Sample a gradient whose stops are spread evenly between `0.0` and `1.0`.
pub fn gradient(colors: &[Color3], t: f32) -> ColorResult<Color3> {
    check_percentage(t)?;

    let (first, rest) = colors.split_first().ok_or(ColorError::EmptyGradient)?;

    if rest.is_empty() {
        return Ok(*first);
    }

    let segments = rest.len();
    let scaled = t * segments as f32;
    let idx = (scaled.floor() as usize).min(segments - 1);
    let frac = scaled - idx as f32;

    Ok(colors[idx].lerp(&colors[idx + 1], frac))
}
