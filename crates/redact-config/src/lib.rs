use anyhow::Context;
use redact_core::{
    Alignment, DEFAULT_HEADER_TEXT, DEFAULT_MARKER, HeaderStyle, RedactionCategory,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for redact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default)]
    pub track_changes: bool,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub categories: CategoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_header_text")]
    pub text: String,

    #[serde(default = "default_true")]
    pub bold: bool,

    #[serde(default = "default_header_size")]
    pub size: u32,

    #[serde(default = "default_header_color")]
    pub color: String,

    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    #[serde(default = "default_true")]
    pub email: bool,

    #[serde(default = "default_true")]
    pub phone: bool,

    #[serde(default = "default_true")]
    pub ssn: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            track_changes: false,
            header: HeaderConfig::default(),
            categories: CategoryConfig::default(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            text: default_header_text(),
            bold: true,
            size: default_header_size(),
            color: default_header_color(),
            alignment: Alignment::default(),
        }
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            email: true,
            phone: true,
            ssn: true,
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_true() -> bool {
    true
}

fn default_header_text() -> String {
    DEFAULT_HEADER_TEXT.to_string()
}

fn default_header_size() -> u32 {
    14
}

fn default_header_color() -> String {
    "#C00000".to_string()
}

impl HeaderConfig {
    pub fn style(&self) -> HeaderStyle {
        HeaderStyle {
            bold: self.bold,
            size: self.size,
            color: self.color.clone(),
            alignment: self.alignment,
        }
    }
}

impl CategoryConfig {
    pub fn enabled(&self) -> Vec<RedactionCategory> {
        [
            (self.email, RedactionCategory::Email),
            (self.phone, RedactionCategory::Phone),
            (self.ssn, RedactionCategory::Ssn),
        ]
        .into_iter()
        .filter_map(|(on, category)| on.then_some(category))
        .collect()
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            tracing::debug!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "redact", "redact") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.redact/config.toml")
        }
    }
}
