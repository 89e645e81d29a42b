use anyhow::Result;
use redact_config::Config;
use redact_core::MatchKind;
use std::path::Path;

pub fn handle(config: &Config, input: &Path, json: bool) -> Result<()> {
    let text = super::read_input(input)?;
    let plan = super::detector(config).plan(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    if plan.is_empty() {
        println!("No sensitive data found.");
        return Ok(());
    }

    let summary = &plan.summary;
    println!("Found:");
    println!("  Emails: {}", summary.emails);
    println!("  Phones: {}", summary.phones);
    println!("  SSNs:   {}", summary.ssns());
    for kind in [MatchKind::FullSsn, MatchKind::MaskedSsn, MatchKind::PartialSsn] {
        println!("    {}: {}", kind, summary.count(kind));
    }
    println!("  Total:  {}", summary.total());
    println!("\n{} unique value(s) to redact", plan.len());

    Ok(())
}
