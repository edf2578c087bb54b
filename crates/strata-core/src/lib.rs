//! Strata Core Types and Definitions
//!
//! This crate provides the foundational types for the Strata ordering
//! engine. It includes:
//!
//! - **Names**: Efficient string-interned name segments ([`ident::Name`])
//! - **Identifiers**: Structured BEM entity identifiers ([`ident::BemIdent`])
//! - **Dependencies**: Ordered dependency pairs between entities ([`dependency`] module)
//! - **Files**: Opaque payload records and file-name helpers ([`file`] module)

pub mod dependency;
pub mod file;
pub mod ident;
