//! Hue-rotation palettes.
//!
//! A scheme keeps the base color's saturation and lightness and steps the
//! hue by [`HUE_STEP`] degrees per entry, so hues repeat every six entries.

use rand::Rng;
use tracing::debug;

use crate::color::{ColorEntry, HexColor, HslColor};
use crate::convert;
use crate::random::random_color_with;

/// Degrees between consecutive scheme entries.
pub const HUE_STEP: u32 = 60;

/// Used when the caller gives no count, or zero.
pub const DEFAULT_SCHEME_COUNT: usize = 5;

/// Larger requests are truncated to this many entries.
pub const MAX_SCHEME_COUNT: usize = 360;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scheme {
    /// Base color actually used, after validation or random fallback.
    pub base: HexColor,
    /// Entries in hue order, starting at the base hue.
    pub scheme: Vec<ColorEntry>,
}

impl Scheme {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.scheme.len()
    }

    /// Whether the scheme has no entries.
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
    }
}

/// Clamp a requested size into `1..=MAX_SCHEME_COUNT`, defaulting to
/// [`DEFAULT_SCHEME_COUNT`].
pub fn effective_count(count: Option<usize>) -> usize {
    match count {
        None | Some(0) => DEFAULT_SCHEME_COUNT,
        Some(n) => n.min(MAX_SCHEME_COUNT),
    }
}

/// Scheme of `count` colors around `base`, using a random base when `base`
/// is absent or not a valid hex color.
pub fn generate_scheme(base: Option<&str>, count: Option<usize>) -> Scheme {
    generate_scheme_with(&mut rand::rng(), base, count)
}

/// As [`generate_scheme`], drawing the fallback base from `rng`.
pub fn generate_scheme_with<R: Rng>(
    rng: &mut R,
    base: Option<&str>,
    count: Option<usize>,
) -> Scheme {
    let base = match base.map(HexColor::parse) {
        Some(Ok(hex)) => hex,
        Some(Err(err)) => {
            debug!(%err, "falling back to a random scheme base");
            random_color_with(rng)
        }
        None => random_color_with(rng),
    };

    let scheme = scheme_from_hsl(base.to_hsl(), effective_count(count));
    Scheme { base, scheme }
}

/// Entries for `count` hue steps starting at `base`. The reported HSL is the
/// requested one, not the value recovered from the rounded hex.
pub fn scheme_from_hsl(base: HslColor, count: usize) -> Vec<ColorEntry> {
    (0..count)
        .map(|i| {
            let hsl = base.rotate_hue((i as u32 % 6) * HUE_STEP);
            let rgb = convert::hsl_to_rgb(hsl);
            ColorEntry {
                hex: convert::rgb_to_hex(rgb),
                rgb,
                hsl,
            }
        })
        .collect()
}
