//! Command-line interface for datadiff

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datadiff")]
#[command(about = "A content-hash based comparison engine for tabular datasets")]
#[command(version)]
pub struct Cli {
    /// First (referent) input file
    pub input0: PathBuf,

    /// Second input file
    pub input1: PathBuf,

    /// Label for the first source
    #[arg(long, default_value = "source_0")]
    pub name0: String,

    /// Label for the second source
    #[arg(long, default_value = "source_1")]
    pub name1: String,

    /// Comma-separated pairing (key) columns for grouped refinement
    #[arg(long, value_delimiter = ',')]
    pub key: Option<Vec<String>>,

    /// Output format: "pretty", "json"
    #[arg(long, default_value = "pretty")]
    pub format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse output format string
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}
