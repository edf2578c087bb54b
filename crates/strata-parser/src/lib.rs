//! # Strata Parser
//!
//! Parsing pipeline for the Strata ordering engine: file-name stems become
//! BEM entity identifiers, and YAML dependency declarations become plain
//! dependency edges.
//!
//! ## Usage
//!
//! ```
//! # use strata_parser::{parse_declaration, parse_stem, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let owner = parse_stem("menu")?;
//!     let edges = parse_declaration(owner, "- b-reset\n- b-grid\n")?;
//!
//!     assert_eq!(edges.len(), 2);
//!     Ok(())
//! }
//! ```

mod decl;
#[cfg(test)]
mod decl_tests;
mod error;
mod normalize;
mod stem;

pub use error::ParseError;
pub use stem::parse_stem;

use log::debug;
use strata_core::{dependency::DependencyEdge, ident::BemIdent};

/// Parse one dependency declaration document into edges from its owner.
///
/// This is the main entry point for declaration handling. It orchestrates
/// the two declaration phases:
///
/// 1. **Deserialize** - Read the YAML document into one of the recognized
///    shorthand shapes
/// 2. **Normalize** - Expand the shape into `(owner, dependency)` edges
///
/// # Arguments
///
/// * `owner` - The entity the declaration file belongs to
/// * `source` - The declaration document text
///
/// # Returns
///
/// Returns the expanded [`DependencyEdge`]s on success. Empty and `null`
/// documents produce no edges. A document that fits none of the recognized
/// shapes fails with [`ParseError::Declaration`]; a declared name that does
/// not follow BEM naming fails with [`ParseError::InvalidNaming`], so every
/// edge target is a parsed identifier, never an opaque string.
///
/// # Example
///
/// ```
/// # use strata_parser::{parse_declaration, parse_stem, ParseError};
///
/// fn main() -> Result<(), ParseError> {
///     let owner = parse_stem("popup")?;
///     let edges = parse_declaration(owner, "- block: b-overlay\n  mods:\n    theme: dark\n")?;
///
///     assert_eq!(edges.len(), 2);
///     Ok(())
/// }
/// ```
pub fn parse_declaration(
    owner: BemIdent,
    source: &str,
) -> Result<Vec<DependencyEdge>, ParseError> {
    // Step 1: Deserialize
    let document = decl::parse_document(owner, source)?;

    // Step 2: Normalize
    let edges = normalize::normalize(owner, document)?;

    debug!(owner:% = owner, edges = edges.len(); "Declaration normalized");
    Ok(edges)
}
