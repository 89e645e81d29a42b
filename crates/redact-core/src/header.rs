use serde::{Deserialize, Serialize};

/// Banner text inserted above a redacted document
pub const DEFAULT_HEADER_TEXT: &str = "REDACTED DOCUMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Formatting for the banner inserted at the top of a redacted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStyle {
    pub bold: bool,
    pub size: u32,
    pub color: String,
    pub alignment: Alignment,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            bold: true,
            size: 14,
            color: "#C00000".to_string(),
            alignment: Alignment::Center,
        }
    }
}
