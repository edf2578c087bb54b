//! Expansion of declaration shapes into dependency edges.
//!
//! Each document shape has its own expansion function. All produced edges
//! run from the declaration owner to a dependency; self-edges are allowed
//! here and dropped by the graph.
//!
//! Declared names are validated on the way through: a flat entry is a full
//! stem and goes through the stem parser, so `menu__item` unifies with the
//! identifier parsed from the payload file of the same name. Names in
//! structured positions (`block`, `elem`, modifier names and values) are
//! single segments and must stay inside the segment charset.

use strata_core::{
    dependency::DependencyEdge,
    ident::{BemIdent, Name},
};

use crate::{
    decl::{DeclDocument, DeclEntry, DeclNode, ElemEntry, ModValues, ModsDecl},
    error::ParseError,
    stem::parse_stem,
};

/// Expands a deserialized document into edges from `owner`.
pub(crate) fn normalize(
    owner: BemIdent,
    document: Option<DeclDocument>,
) -> Result<Vec<DependencyEdge>, ParseError> {
    let mut edges = Vec::new();
    match document {
        None => {}
        Some(DeclDocument::Entries(entries)) => {
            for entry in &entries {
                normalize_entry(owner, entry, &mut edges)?;
            }
        }
        Some(DeclDocument::Scoped(node)) => normalize_node(owner, &node, &mut edges)?,
    }
    Ok(edges)
}

/// Validates one declared name segment: letters, digits, and hyphens.
///
/// Separator-bearing names are rejected here so a structured position can
/// never smuggle in a stem that the graph would treat as a distinct node.
fn segment(name: &str) -> Result<Name, ParseError> {
    let valid =
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(Name::new(name))
    } else {
        Err(ParseError::InvalidNaming(name.to_string()))
    }
}

fn normalize_entry(
    owner: BemIdent,
    entry: &DeclEntry,
    edges: &mut Vec<DependencyEdge>,
) -> Result<(), ParseError> {
    match entry {
        // A flat entry is a full stem: `menu__item` resolves to the elem
        // identifier, not to a block whose name merely displays the same.
        DeclEntry::Name(name) => {
            edges.push(DependencyEdge::new(owner, parse_stem(name)?));
            Ok(())
        }
        DeclEntry::Node(node) => normalize_node(owner, node, edges),
    }
}

/// Expands one structured node.
///
/// The node always contributes an edge to its primary target (`block` or
/// `block__elem`), then one edge per expanded elem and modifier.
fn normalize_node(
    owner: BemIdent,
    node: &DeclNode,
    edges: &mut Vec<DependencyEdge>,
) -> Result<(), ParseError> {
    let block = match node.block.as_deref() {
        Some(name) => segment(name)?,
        None => owner.block_name(),
    };

    let primary = match node.elem.as_deref() {
        Some(elem) => BemIdent::block(block).with_elem(segment(elem)?),
        None => BemIdent::block(block),
    };
    edges.push(DependencyEdge::new(owner, primary));

    for entry in node.elems.iter().flatten() {
        match entry {
            ElemEntry::Name(elem) => {
                let target = BemIdent::block(block).with_elem(segment(elem)?);
                edges.push(DependencyEdge::new(owner, target));
            }
            ElemEntry::Node(elem_node) => {
                let target = BemIdent::block(block).with_elem(segment(&elem_node.elem)?);
                edges.push(DependencyEdge::new(owner, target));
                if let Some(mods) = &elem_node.mods {
                    normalize_mods(owner, target, mods, edges)?;
                }
            }
        }
    }

    if let Some(mods) = &node.mods {
        normalize_mods(owner, primary, mods, edges)?;
    }

    Ok(())
}

/// Expands a `mods:` section against its subject entity.
fn normalize_mods(
    owner: BemIdent,
    subject: BemIdent,
    mods: &ModsDecl,
    edges: &mut Vec<DependencyEdge>,
) -> Result<(), ParseError> {
    match mods {
        ModsDecl::Names(names) => {
            for name in names {
                edges.push(DependencyEdge::new(owner, subject.with_flag(segment(name)?)));
            }
        }
        ModsDecl::Table(table) => {
            for (name, values) in table {
                let name = segment(name)?;
                match values {
                    ModValues::Flag(true) => {
                        edges.push(DependencyEdge::new(owner, subject.with_flag(name)));
                    }
                    // A disabled row contributes nothing.
                    ModValues::Flag(false) => {}
                    ModValues::One(value) => {
                        edges.push(DependencyEdge::new(
                            owner,
                            subject.with_mod(name, segment(value)?),
                        ));
                    }
                    ModValues::Many(values) => {
                        for value in values {
                            edges.push(DependencyEdge::new(
                                owner,
                                subject.with_mod(name, segment(value)?),
                            ));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
