//! CLI logic for the Strata bundle ordering tool.
//!
//! This module contains the core CLI logic for the Strata bundle tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use strata::{BundleOrderer, StrataError, file::FileRecord};

/// Run the Strata CLI application
///
/// This function gathers the input files, orders them through the Strata
/// pipeline, and writes the resulting bundle (or file list) to the output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StrataError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid BEM file names
/// - Malformed declaration documents
/// - Circular dependencies
pub fn run(args: &Args) -> Result<(), StrataError> {
    info!(inputs = args.inputs.len(); "Processing bundle");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Gather input records
    let records = gather_inputs(&args.inputs)?;
    debug!(records = records.len(); "Inputs gathered");

    // Order the batch using the BundleOrderer API
    let orderer = BundleOrderer::new(app_config);
    let separator = orderer.config().bundle().separator().to_string();
    let ordered = orderer.order(records)?;

    // Assemble the output
    let output = if args.list {
        render_list(&ordered)
    } else {
        render_bundle(&ordered, separator.as_bytes())
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path.as_str(); "Bundle written successfully");
        }
        None => io::stdout().write_all(&output)?,
    }

    Ok(())
}

/// Expands the input arguments into file records.
///
/// Explicit file arguments keep their given order. A directory argument is
/// expanded non-recursively into its files in sorted name order.
fn gather_inputs(inputs: &[String]) -> Result<Vec<FileRecord>, StrataError> {
    let mut records = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)?
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .map(|entry| entry.path())
                .filter(|p| p.is_file())
                .collect();
            entries.sort();

            for entry in entries {
                records.push(read_record(&entry)?);
            }
        } else {
            records.push(read_record(path)?);
        }
    }

    Ok(records)
}

fn read_record(path: &Path) -> Result<FileRecord, StrataError> {
    let contents = fs::read(path)?;
    Ok(FileRecord::new(path, contents))
}

/// Joins payload contents with the configured separator.
fn render_bundle(records: &[FileRecord], separator: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            output.extend_from_slice(separator);
        }
        output.extend_from_slice(record.contents());
    }
    output
}

/// One path per line, in computed order.
fn render_list(records: &[FileRecord]) -> Vec<u8> {
    let mut output = String::new();
    for record in records {
        output.push_str(&record.path().display().to_string());
        output.push('\n');
    }
    output.into_bytes()
}
