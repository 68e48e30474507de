//! Hex / RGB / HSL conversion.
//!
//! Every function here is pure. Malformed hex input yields `None` rather
//! than an error; callers decide how to surface it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{HexColor, HslColor, RgbColor};

/// Pattern every externally supplied hex color must match.
pub const HEX_PATTERN: &str = r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$";

static HEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(HEX_PATTERN).unwrap_or_else(|err| {
        unreachable!("hex pattern is a valid regex: {err}")
    })
});

/// Whether `input` matches [`HEX_PATTERN`].
pub fn is_valid_hex(input: &str) -> bool {
    HEX_RE.is_match(input)
}

/// Decode `#RRGGBB` (the `#` is optional, digits are case-insensitive).
pub fn hex_to_rgb(hex: &str) -> Option<RgbColor> {
    let caps = HEX_RE.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some(RgbColor::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Encode as canonical uppercase `#RRGGBB`.
pub fn rgb_to_hex(rgb: RgbColor) -> HexColor {
    HexColor::from(rgb)
}

/// Convert to HSL, rounding each component to the nearest whole unit.
///
/// Grays (including black and white) report hue and saturation 0.
pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // achromatic
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    // A hue that rounds up to a full turn is the same angle as 0.
    let h = (h * 360.0).round() as u16 % 360;
    HslColor::new(h, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
}

/// Convert back to 8-bit channels. The hue is taken mod 360; saturation and
/// lightness above 100 are clamped.
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h = f64::from(hsl.h % 360) / 360.0;
    let s = f64::from(hsl.s.min(100)) / 100.0;
    let l = f64::from(hsl.l.min(100)) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    RgbColor::new(to_channel(r), to_channel(g), to_channel(b))
}

/// [`hex_to_rgb`] followed by [`rgb_to_hsl`].
pub fn hex_to_hsl(hex: &str) -> Option<HslColor> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// [`hsl_to_rgb`] followed by [`rgb_to_hex`].
pub fn hsl_to_hex(hsl: HslColor) -> HexColor {
    rgb_to_hex(hsl_to_rgb(hsl))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
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

fn to_channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_accepts_optional_prefix_and_mixed_case() {
        let expected = Some(RgbColor::new(0x1E, 0x90, 0xFF));
        assert_eq!(hex_to_rgb("#1E90FF"), expected);
        assert_eq!(hex_to_rgb("1e90ff"), expected);
        assert_eq!(hex_to_rgb("#1e90Ff"), expected);
    }

    #[test]
    fn hex_to_rgb_rejects_anything_off_pattern() {
        for input in [
            "red", "#12345", "#1234567", "123456!", "", "##123456", " #123456",
            "#123456 ", "#12 456", "0x123456",
        ] {
            assert_eq!(hex_to_rgb(input), None, "{input:?}");
            assert!(!is_valid_hex(input), "{input:?}");
        }
    }

    #[test]
    fn rgb_to_hex_pads_and_uppercases() {
        assert_eq!(rgb_to_hex(RgbColor::new(0, 10, 255)).as_str(), "#000AFF");
        assert_eq!(rgb_to_hex(RgbColor::new(171, 205, 239)).as_str(), "#ABCDEF");
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        assert_eq!(hex_to_hsl("#000000"), Some(HslColor::new(0, 0, 0)));
        assert_eq!(hex_to_hsl("#FFFFFF"), Some(HslColor::new(0, 0, 100)));
        assert_eq!(hex_to_hsl("#808080"), Some(HslColor::new(0, 0, 50)));
    }

    #[test]
    fn primaries_and_secondaries() {
        let cases = [
            ("#FF0000", HslColor::new(0, 100, 50)),
            ("#FFFF00", HslColor::new(60, 100, 50)),
            ("#00FF00", HslColor::new(120, 100, 50)),
            ("#00FFFF", HslColor::new(180, 100, 50)),
            ("#0000FF", HslColor::new(240, 100, 50)),
            ("#FF00FF", HslColor::new(300, 100, 50)),
        ];
        for (hex, hsl) in cases {
            assert_eq!(hex_to_hsl(hex), Some(hsl), "{hex}");
            assert_eq!(hsl_to_hex(hsl).as_str(), hex, "{hsl:?}");
        }
    }

    #[test]
    fn known_sample_colors() {
        // Values as reported by the browser client for the seeded colors.
        assert_eq!(hex_to_hsl("#1E90FF"), Some(HslColor::new(210, 100, 56)));
        assert_eq!(hex_to_hsl("#FF6B6B"), Some(HslColor::new(0, 100, 71)));
        assert_eq!(hex_to_hsl("#51CF66"), Some(HslColor::new(130, 57, 56)));
    }

    #[test]
    fn red_max_with_green_below_blue_wraps_hue() {
        // Pinkish red: max is red and g < b so the +6 branch applies.
        let hsl = rgb_to_hsl(RgbColor::new(255, 0, 128));
        assert_eq!(hsl, HslColor::new(330, 100, 50));
    }

    #[test]
    fn hue_rounding_to_full_turn_wraps_to_zero() {
        // (g - b) / d + 6 lands just under 6 here, which rounds to 360.
        let hsl = rgb_to_hsl(RgbColor::new(255, 0, 1));
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn hsl_to_rgb_achromatic_branch() {
        assert_eq!(hsl_to_rgb(HslColor::new(123, 0, 50)), RgbColor::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(HslColor::new(0, 0, 100)), RgbColor::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(HslColor::new(0, 0, 0)), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn hsl_to_rgb_tolerates_out_of_range_components() {
        assert_eq!(
            hsl_to_rgb(HslColor::new(480, 100, 50)),
            hsl_to_rgb(HslColor::new(120, 100, 50))
        );
        assert_eq!(
            hsl_to_rgb(HslColor::new(0, 250, 50)),
            hsl_to_rgb(HslColor::new(0, 100, 50))
        );
    }
}
