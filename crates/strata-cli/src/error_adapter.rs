//! Error adapter for converting StrataError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Strata
//! errors carry no source spans, so the adapter contributes stable codes
//! and per-kind help text rather than labeled snippets.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use strata::StrataError;
use strata_parser::ParseError;

/// A reportable error that can be rendered by miette.
///
/// Wraps a [`StrataError`] and implements [`MietteDiagnostic`] so the CLI
/// can render it with a graphical report handler.
pub struct Reportable<'a>(pub &'a StrataError);

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StrataError::Io(_) => "strata::io",
            StrataError::Parse(ParseError::InvalidNaming(_)) => "strata::naming",
            StrataError::Parse(ParseError::Declaration { .. }) => "strata::decl",
            StrataError::CircularDependency(_) => "strata::cycle",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            StrataError::Io(_) => return None,
            StrataError::Parse(ParseError::InvalidNaming(_)) => {
                "file stems must follow BEM naming: block, block__elem, \
                 block_mod, block_mod_val, block__elem_mod, block__elem_mod_val"
            }
            StrataError::Parse(ParseError::Declaration { .. }) => {
                "declaration documents are YAML lists of block names or nodes \
                 with `block`, `elem`, `elems`, and `mods` keys"
            }
            StrataError::CircularDependency(_) => {
                "remove one declared dependency from the loop; an entity can \
                 never depend on itself, directly or transitively"
            }
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`StrataError`] into a list of reportable errors.
///
/// Strata surfaces one terminal error per batch, so the list always has a
/// single element; the list shape keeps the render loop uniform.
pub fn to_reportables(err: &StrataError) -> Vec<Reportable<'_>> {
    vec![Reportable(err)]
}

#[cfg(test)]
mod tests {
    use strata::ident::BemIdent;

    use super::*;

    fn code_of(err: &StrataError) -> String {
        Reportable(err).code().unwrap().to_string()
    }

    #[test]
    fn test_codes_are_stable() {
        let io = StrataError::Io(std::io::Error::other("boom"));
        let naming = StrataError::Parse(ParseError::InvalidNaming("x__".to_string()));
        let cycle = StrataError::CircularDependency(BemIdent::block("a"));

        assert_eq!(code_of(&io), "strata::io");
        assert_eq!(code_of(&naming), "strata::naming");
        assert_eq!(code_of(&cycle), "strata::cycle");
    }

    #[test]
    fn test_display_passes_through() {
        let err = StrataError::Parse(ParseError::InvalidNaming("bad____name".to_string()));

        assert_eq!(
            Reportable(&err).to_string(),
            "Invalid bem naming used: bad____name"
        );
    }

    #[test]
    fn test_help_present_for_cycle() {
        let err = StrataError::CircularDependency(BemIdent::block("a"));

        assert!(Reportable(&err).help().is_some());
    }

    #[test]
    fn test_single_reportable_per_error() {
        let err = StrataError::CircularDependency(BemIdent::block("a"));

        assert_eq!(to_reportables(&err).len(), 1);
    }
}
