use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "redact")]
#[command(about = "Find and redact emails, phone numbers and SSNs in text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "REDACT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report what would be redacted without changing anything
    Scan {
        /// Input file, or - for stdin
        input: PathBuf,

        /// Print the full plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Redact a text file
    Apply {
        /// Input file, or - for stdin
        input: PathBuf,

        /// Where to write the redacted text (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replacement text for each redacted span
        #[arg(long)]
        marker: Option<String>,

        /// Record redactions as revisions
        #[arg(long)]
        track_changes: bool,

        /// Do not insert the redaction header
        #[arg(long)]
        no_header: bool,
    },
}
