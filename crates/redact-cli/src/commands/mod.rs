pub mod apply;
pub mod scan;

use anyhow::{Context, Result};
use redact_config::Config;
use redact_detect::Detector;
use redact_engine::{Engine, EngineOptions, Header};
use std::io::Read;
use std::path::Path;

/// Command-line flags that take precedence over the config file
#[derive(Debug, Default)]
pub struct Overrides {
    pub marker: Option<String>,
    pub track_changes: bool,
    pub no_header: bool,
}

/// Read the whole input, `-` meaning stdin
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn detector(config: &Config) -> Detector {
    Detector::with_categories(config.categories.enabled())
}

pub fn engine(config: &Config, overrides: Overrides) -> Engine {
    let header = (config.header.enabled && !overrides.no_header).then(|| Header {
        text: config.header.text.clone(),
        style: config.header.style(),
    });

    let options = EngineOptions {
        marker: overrides.marker.unwrap_or_else(|| config.marker.clone()),
        track_changes: config.track_changes || overrides.track_changes,
        header,
    };
    Engine::new(detector(config), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let config = Config::default();
        let engine = engine(
            &config,
            Overrides {
                marker: Some("***".to_string()),
                track_changes: true,
                no_header: true,
            },
        );

        assert_eq!(engine.options().marker, "***");
        assert!(engine.options().track_changes);
        assert!(engine.options().header.is_none());
    }

    #[test]
    fn test_config_header_used_by_default() {
        let engine = engine(&Config::default(), Overrides::default());
        let header = engine.options().header.as_ref().unwrap();
        assert_eq!(header.text, "REDACTED DOCUMENT");
    }
}
