use anyhow::{Context, Result};
use redact_config::Config;
use redact_engine::MemoryDocument;
use std::path::Path;
use tracing::info;

use super::Overrides;

pub async fn handle(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    overrides: Overrides,
) -> Result<()> {
    let text = super::read_input(input)?;
    let engine = super::engine(config, overrides);

    let mut document = MemoryDocument::new(text);
    let result = engine.run(&mut document).await;

    match output {
        Some(path) => {
            std::fs::write(path, document.text())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote redacted text to {}", path.display());
        }
        None => print!("{}", document.text()),
    }

    eprintln!("{}", serde_json::to_string_pretty(&result)?);

    if !result.success {
        anyhow::bail!(
            "Redaction failed: {}",
            result.error.as_deref().unwrap_or("unknown error")
        );
    }
    if result.total_redacted == 0 {
        info!("Scanned, nothing found");
    }
    Ok(())
}
