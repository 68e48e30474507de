//! Value types for the three color representations the service speaks.

use std::fmt;
use std::str::FromStr;

use crate::convert;
use crate::error::ColorError;

/// A canonical `#RRGGBB` color with uppercase digits.
///
/// The only ways to obtain one are validated parsing or conversion from an
/// [`RgbColor`], so the inner string always holds exactly seven characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct HexColor(String);

impl HexColor {
    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        convert::hex_to_rgb(input)
            .map(Self::from)
            .ok_or_else(|| ColorError::InvalidFormat(input.to_string()))
    }

    /// The canonical `#RRGGBB` text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded 8-bit channels.
    pub fn to_rgb(&self) -> RgbColor {
        // Canonical by construction; the digits always decode.
        let channel = |i: usize| {
            u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or_default()
        };
        RgbColor::new(channel(1), channel(3), channel(5))
    }

    /// Rounded HSL form, see [`convert::rgb_to_hsl`].
    pub fn to_hsl(&self) -> HslColor {
        convert::rgb_to_hsl(self.to_rgb())
    }

    /// The color in all three representations.
    pub fn entry(&self) -> ColorEntry {
        ColorEntry {
            hex: self.clone(),
            rgb: self.to_rgb(),
            hsl: self.to_hsl(),
        }
    }

    pub(crate) fn from_packed(value: u32) -> Self {
        Self(format!("#{:06X}", value & 0x00FF_FFFF))
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl RgbColor {
    /// Color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue in whole degrees `[0, 360)`, saturation and lightness in whole
/// percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HslColor {
    /// Hue, degrees.
    pub h: u16,
    /// Saturation, percent.
    pub s: u8,
    /// Lightness, percent.
    pub l: u8,
}

impl HslColor {
    /// Color from hue, saturation and lightness. Values are stored as given.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Same saturation and lightness, hue rotated by `degrees` (mod 360).
    pub fn rotate_hue(self, degrees: u32) -> Self {
        let h = ((u32::from(self.h) + degrees % 360) % 360) as u16;
        Self { h, ..self }
    }
}

/// One color reported as hex, RGB and HSL together.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorEntry {
    /// Canonical hex form.
    pub hex: HexColor,
    /// Channel form.
    pub rgb: RgbColor,
    /// HSL form.
    pub hsl: HslColor,
}
