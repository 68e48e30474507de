//! # Chroma Core
//!
//! Core library for the Chroma color service, providing the color value
//! types, the conversion engine and the storage port used by the server.
//!
//! ## Overview
//!
//! - **Conversion**: pure hex ↔ RGB ↔ HSL functions in [`convert`]
//! - **Random colors**: uniform `#RRGGBB` generation in [`random`]
//! - **Schemes**: hue-rotation palettes in [`scheme`]
//! - **Storage**: the [`storage::ColorRepository`] port and an in-memory adapter
//!
//! ## Feature Flags
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the value types
//!
//! ## Examples
//!
//! ```
//! use chroma_core::{convert, scheme::generate_scheme, HslColor};
//!
//! assert_eq!(convert::hex_to_hsl("#FF0000"), Some(HslColor::new(0, 100, 50)));
//!
//! let scheme = generate_scheme(Some("#ff0000"), Some(3));
//! assert_eq!(scheme.base.as_str(), "#FF0000");
//! assert_eq!(scheme.scheme[1].hex.as_str(), "#FFFF00");
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod random;
pub mod scheme;
pub mod storage;

pub use color::{ColorEntry, HexColor, HslColor, RgbColor};
pub use error::{ColorError, Result};
pub use random::random_color;
pub use scheme::{Scheme, generate_scheme};
pub use storage::{
    ColorRepository, InMemoryColorRepository, NewColor, SavedColor,
    SavedColorDetails,
};
