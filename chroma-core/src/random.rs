//! Uniformly random colors.

use rand::Rng;

use crate::color::HexColor;

/// Largest value representable in six hex digits.
pub const MAX_PACKED_COLOR: u32 = 0x00FF_FFFF;

/// Uniformly random color from the thread-local generator.
pub fn random_color() -> HexColor {
    random_color_with(&mut rand::rng())
}

/// Uniformly random color drawn from `rng`.
pub fn random_color_with<R: Rng>(rng: &mut R) -> HexColor {
    HexColor::from_packed(rng.random_range(0..=MAX_PACKED_COLOR))
}
