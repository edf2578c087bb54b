//! Command-line argument definitions for the Strata CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Strata bundle ordering tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input files and directories (directories are expanded non-recursively)
    #[arg(required = true, help = "Files and directories to bundle")]
    pub inputs: Vec<String>,

    /// Path to the output bundle file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the computed file order instead of writing a bundle
    #[arg(short, long)]
    pub list: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
