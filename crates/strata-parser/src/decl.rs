//! Declaration document shapes.
//!
//! A declaration document is a small YAML file describing what one entity
//! depends on. Authors use several shorthand forms, so the document is
//! modeled as untagged `serde` enums: deserialization picks the matching
//! variant, and [`normalize`](crate::normalize) expands each variant with a
//! dedicated function instead of probing the data dynamically.

use indexmap::IndexMap;
use serde::Deserialize;

use strata_core::ident::BemIdent;

use crate::error::ParseError;

/// A whole declaration document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum DeclDocument {
    /// A sequence of dependency entries.
    Entries(Vec<DeclEntry>),
    /// A single mapping; its target defaults to the owner's block.
    Scoped(DeclNode),
}

/// One entry of a dependency sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum DeclEntry {
    /// Bare block name.
    Name(String),
    /// Structured node with elem and modifier expansions.
    Node(DeclNode),
}

/// A structured dependency node.
///
/// `block` falls back to the owner's block when omitted, which is how a
/// declaration refers to parts of its own block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DeclNode {
    pub block: Option<String>,
    /// Single element under the target block; becomes the primary target.
    pub elem: Option<String>,
    /// Additional elements under the target block.
    pub elems: Option<Vec<ElemEntry>>,
    /// Modifier expansions applied to the primary target.
    pub mods: Option<ModsDecl>,
    /// Implementation technology tag carried by some authoring tools; it
    /// plays no part in ordering.
    pub tech: Option<String>,
}

/// One entry of an `elems:` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ElemEntry {
    /// Bare element name.
    Name(String),
    /// Element with its own modifier expansions.
    Node(ElemNode),
}

/// An element sub-node inside `elems:`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ElemNode {
    pub elem: String,
    pub mods: Option<ModsDecl>,
}

/// The `mods:` section of a node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ModsDecl {
    /// Flag list form: every listed modifier is boolean `true`.
    Names(Vec<String>),
    /// Table form: modifier name to value(s), document order preserved.
    Table(IndexMap<String, ModValues>),
}

/// The right-hand side of one `mods:` table row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ModValues {
    /// Boolean form: `true` is the flag modifier, `false` disables the row.
    Flag(bool),
    /// A single modifier value.
    One(String),
    /// Several values of the same modifier.
    Many(Vec<String>),
}

/// Deserializes a declaration document, attributing failures to `owner`.
///
/// Empty and `null` documents come back as `None`.
pub(crate) fn parse_document(
    owner: BemIdent,
    source: &str,
) -> Result<Option<DeclDocument>, ParseError> {
    serde_yaml::from_str(source).map_err(|source| ParseError::Declaration {
        owner: owner.to_string(),
        source,
    })
}
