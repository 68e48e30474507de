use chroma_core::{ColorEntry, HexColor, SavedColor, SavedColorDetails};
use serde::Serialize;

/// `{ success, color, message? }`
#[derive(Debug, Clone, Serialize)]
pub struct ColorResponse<T> {
    pub success: bool,
    pub color: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ColorResponse<T> {
    pub fn new(color: T) -> Self {
        Self {
            success: true,
            color,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

pub type RandomColorResponse = ColorResponse<ColorEntry>;
pub type SavedColorResponse = ColorResponse<SavedColor>;
pub type ColorDetailsResponse = ColorResponse<SavedColorDetails>;

#[derive(Debug, Clone, Serialize)]
pub struct SchemeResponse {
    pub success: bool,
    pub base: HexColor,
    pub scheme: Vec<ColorEntry>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorListResponse {
    pub success: bool,
    pub count: usize,
    pub colors: Vec<SavedColor>,
}

impl ColorListResponse {
    pub fn new(colors: Vec<SavedColor>) -> Self {
        Self {
            success: true,
            count: colors.len(),
            colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_is_omitted_when_absent() {
        let hex = HexColor::parse("#00FF00").unwrap();
        let value = serde_json::to_value(ColorResponse::new(hex.entry())).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "color": {
                    "hex": "#00FF00",
                    "rgb": { "r": 0, "g": 255, "b": 0 },
                    "hsl": { "h": 120, "s": 100, "l": 50 }
                }
            })
        );
    }

    #[test]
    fn list_counts_its_colors() {
        let colors = vec![SavedColor {
            id: 1,
            name: "Lime".into(),
            hex: HexColor::parse("#00FF00").unwrap(),
        }];
        let value = serde_json::to_value(ColorListResponse::new(colors)).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["colors"][0]["hex"], "#00FF00");
    }
}
