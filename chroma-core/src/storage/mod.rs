//! Storage port for named colors.
//!
//! The service owns an `Arc<dyn ColorRepository>`; the conversion engine
//! never touches it.

mod in_memory;

pub use in_memory::InMemoryColorRepository;

use async_trait::async_trait;

use crate::color::{ColorEntry, HexColor, HslColor, RgbColor};
use crate::error::{ColorError, Result};

/// A color saved under a user-chosen name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedColor {
    /// Repository-assigned id, starting at 1.
    pub id: u64,
    /// Display name as submitted, trimmed.
    pub name: String,
    /// Stored color.
    pub hex: HexColor,
}

impl SavedColor {
    /// The saved color with its RGB and HSL forms filled in.
    pub fn details(&self) -> SavedColorDetails {
        let ColorEntry { hex, rgb, hsl } = self.hex.entry();
        SavedColorDetails {
            id: self.id,
            name: self.name.clone(),
            hex,
            rgb,
            hsl,
        }
    }
}

/// A saved color augmented with its RGB and HSL forms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedColorDetails {
    /// See [`SavedColor::id`].
    pub id: u64,
    /// See [`SavedColor::name`].
    pub name: String,
    /// See [`SavedColor::hex`].
    pub hex: HexColor,
    /// Channel form of `hex`.
    pub rgb: RgbColor,
    /// HSL form of `hex`.
    pub hsl: HslColor,
}

/// Validated input for [`ColorRepository::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColor {
    /// Non-blank display name.
    pub name: String,
    /// Validated color.
    pub hex: HexColor,
}

impl NewColor {
    /// Validate raw request fields. Blank values count as missing.
    pub fn from_parts(name: Option<&str>, hex: Option<&str>) -> Result<Self> {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ColorError::MissingField("name"))?;
        let hex = hex
            .map(str::trim)
            .filter(|hex| !hex.is_empty())
            .ok_or(ColorError::MissingField("hex"))?;

        Ok(Self {
            name: name.to_string(),
            hex: HexColor::parse(hex)?,
        })
    }
}

/// Persistence for saved colors.
///
/// Backends report their own failures as [`ColorError::Storage`].
#[async_trait]
pub trait ColorRepository: Send + Sync {
    /// All saved colors in insertion order.
    async fn list(&self) -> Result<Vec<SavedColor>>;

    /// Store `color` under the next free id and return the stored record.
    async fn append(&self, color: NewColor) -> Result<SavedColor>;

    /// Look up one color; `Ok(None)` when the id is unknown.
    async fn find_by_id(&self, id: u64) -> Result<Option<SavedColor>>;

    /// Number of saved colors.
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}
