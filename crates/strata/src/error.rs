//! Error types for Strata operations.
//!
//! This module provides the main error type [`StrataError`] which wraps the
//! error conditions that can occur while ordering a bundle.

use std::io;

use thiserror::Error;

use strata_core::ident::BemIdent;
use strata_parser::ParseError;

/// The main error type for Strata operations.
///
/// Every variant is terminal for the batch that produced it: no payload
/// files are emitted once an error has been detected.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The merged graph loops back on itself through the named entity.
    #[error("circular dependency detected at `{0}`")]
    CircularDependency(BemIdent),
}
