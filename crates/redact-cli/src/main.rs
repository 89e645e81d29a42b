mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use redact_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for redacted output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Scan { input, json } => commands::scan::handle(&config, &input, json),
        cli::Commands::Apply {
            input,
            output,
            marker,
            track_changes,
            no_header,
        } => {
            let overrides = commands::Overrides {
                marker,
                track_changes,
                no_header,
            };
            commands::apply::handle(&config, &input, output.as_deref(), overrides).await
        }
    }
}
