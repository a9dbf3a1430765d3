//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kinesis Feeder CLI
#[derive(Parser, Debug)]
#[command(name = "kinesis-feeder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job configuration file (YAML); built-in defaults apply when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Input document URL or path (overrides config)
    #[arg(short, long, global = true)]
    pub input: Option<String>,

    /// Destination stream name (overrides config)
    #[arg(short, long, global = true)]
    pub stream: Option<String>,

    /// AWS region of the stream (overrides config)
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the input document and push it to the stream in batches
    Run,

    /// Read and batch the input without submitting anything; print the plan
    Plan,

    /// Validate the configuration and exit
    Validate,
}
