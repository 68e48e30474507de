use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ColorRepository, NewColor, SavedColor};
use crate::color::HexColor;
use crate::error::Result;

/// Sample palette a fresh service starts with.
const SAMPLE_COLORS: [(&str, u32); 3] = [
    ("Bright blue", 0x1E90FF),
    ("Warm red", 0xFF6B6B),
    ("Juicy green", 0x51CF66),
];

/// Process-local color list. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryColorRepository {
    colors: RwLock<Vec<SavedColor>>,
}

impl InMemoryColorRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with ids 1..=3 of the sample palette.
    pub fn seeded() -> Self {
        let colors = SAMPLE_COLORS
            .iter()
            .zip(1..)
            .map(|(&(name, packed), id)| SavedColor {
                id,
                name: name.to_string(),
                hex: HexColor::from_packed(packed),
            })
            .collect();
        Self {
            colors: RwLock::new(colors),
        }
    }
}

#[async_trait]
impl ColorRepository for InMemoryColorRepository {
    async fn list(&self) -> Result<Vec<SavedColor>> {
        Ok(self.colors.read().await.clone())
    }

    async fn append(&self, color: NewColor) -> Result<SavedColor> {
        let mut colors = self.colors.write().await;
        let id = colors.iter().map(|c| c.id).max().map_or(1, |max| max + 1);
        let saved = SavedColor {
            id,
            name: color.name,
            hex: color.hex,
        };
        colors.push(saved.clone());
        debug!(id, hex = %saved.hex, "color appended");
        Ok(saved)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<SavedColor>> {
        Ok(self.colors.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.colors.read().await.len())
    }
}
