//! Round-trip properties of the conversion engine over a sweep of the
//! 24-bit color space.

use chroma_core::{
    HexColor, RgbColor,
    convert::{hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl},
    random_color,
    scheme::generate_scheme,
};

/// Every 997th packed color plus the corners of the cube.
fn sample_colors() -> impl Iterator<Item = RgbColor> {
    (0..=0x00FF_FFFFu32)
        .step_by(997)
        .chain([0x00FF_FFFF, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF])
        .map(|packed| {
            RgbColor::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
        })
}

fn channel_distance(a: RgbColor, b: RgbColor) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

#[test]
fn hex_rgb_hex_is_exact() {
    for rgb in sample_colors() {
        let hex = rgb_to_hex(rgb);
        assert_eq!(hex_to_rgb(hex.as_str()), Some(rgb), "{hex}");
        assert_eq!(rgb_to_hex(hex_to_rgb(hex.as_str()).unwrap()), hex);
    }
}

#[test]
fn lowercase_and_unprefixed_hex_decode_identically() {
    for rgb in sample_colors() {
        let hex = rgb_to_hex(rgb);
        let bare = hex.as_str().trim_start_matches('#').to_ascii_lowercase();
        assert_eq!(hex_to_rgb(&bare), Some(rgb));
        assert_eq!(HexColor::parse(&bare).unwrap(), hex);
    }
}

#[test]
fn hsl_round_trip_stays_within_rounding_tolerance() {
    // Whole-degree hue and whole-percent s/l cannot address every RGB value.
    // Most colors come back within one unit; saturated mid-tones can drift
    // by up to five.
    let mut exact = 0usize;
    let mut total = 0usize;
    for rgb in sample_colors() {
        let hex = rgb_to_hex(rgb);
        let back = hsl_to_hex(hex_to_hsl(hex.as_str()).unwrap());
        let distance = channel_distance(rgb, hex_to_rgb(back.as_str()).unwrap());
        assert!(distance <= 5, "{hex} -> {back} drifted by {distance}");
        if distance <= 1 {
            exact += 1;
        }
        total += 1;
    }
    assert!(exact * 2 > total, "{exact}/{total} within one unit");
}

#[test]
fn hsl_components_stay_in_range() {
    for rgb in sample_colors() {
        let hsl = rgb_to_hsl(rgb);
        assert!(hsl.h < 360, "{rgb:?} -> {hsl:?}");
        assert!(hsl.s <= 100, "{rgb:?} -> {hsl:?}");
        assert!(hsl.l <= 100, "{rgb:?} -> {hsl:?}");
    }
}

#[test]
fn grays_are_achromatic_and_round_trip_within_one() {
    for v in 0..=255u8 {
        let gray = RgbColor::new(v, v, v);
        let hsl = rgb_to_hsl(gray);
        assert_eq!((hsl.h, hsl.s), (0, 0));
        assert!(channel_distance(gray, hsl_to_rgb(hsl)) <= 1);
    }
}

#[test]
fn random_colors_are_canonical() {
    for _ in 0..500 {
        let hex = random_color();
        let s = hex.as_str();
        assert_eq!(s.len(), 7);
        assert!(s.starts_with('#'));
        assert!(s[1..].chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
    }
}

#[test]
fn random_schemes_are_spaced_sixty_degrees() {
    for _ in 0..50 {
        let scheme = generate_scheme(None, Some(3));
        assert_eq!(scheme.len(), 3);
        let hues: Vec<u16> = scheme.scheme.iter().map(|e| e.hsl.h).collect();
        assert_eq!(hues[1], (hues[0] + 60) % 360);
        assert_eq!(hues[2], (hues[0] + 120) % 360);
        assert_eq!(hues[0], scheme.base.to_hsl().h);
    }
}
