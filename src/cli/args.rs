//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// envgen - generate .env files for sub packages.
///
/// Reads a YAML configuration, resolves every declared variable from the
/// environment (applying the branch suffix to package variables) and writes
/// one env file per package.
#[derive(Debug, Clone, Parser)]
#[command(name = "envgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the YAML configuration file
    pub config: PathBuf,

    /// .env files to load into the environment before generating
    pub env_files: Vec<PathBuf>,

    /// Directory package paths are relative to (defaults to the current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Exit with an error when a variable is missing or a file cannot be written
    #[arg(long, env = "ENVGEN_STRICT", value_parser = clap::builder::FalseyValueParser::new())]
    pub strict: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
