//! Strata - dependency-aware ordering for BEM file bundles.
//!
//! Strata reorders a batch of stylesheet/script fragments so that every
//! file comes after the files it depends on, combining implicit BEM
//! structural dependencies with explicit YAML declarations, and produces a
//! deterministic total order via depth-weighted topological sort.

pub mod config;

mod error;
mod graph;
mod order;

pub use strata_core::{dependency, file, ident};

pub use error::StrataError;

use std::{io, str};

use log::{debug, info};

use strata_core::file::{FileRecord, declaration_owner, file_stem};
use strata_parser::{ParseError, parse_declaration, parse_stem};

use config::AppConfig;
use graph::DependencyGraph;

/// One batch of declarations and payload files awaiting ordering.
///
/// A `Bundle` accumulates everything first and only computes the order when
/// consumed: a file arriving late may be a dependency of one that arrived
/// early, so no prefix of the input determines any part of the output.
///
/// # Examples
///
/// ```
/// use strata::{Bundle, file::FileRecord};
///
/// let mut bundle = Bundle::new();
/// bundle.add_declaration("block", "- mixins\n")?;
/// bundle.add_declaration("mixins", "- variables\n")?;
///
/// bundle.add_file(FileRecord::new("block.css", b".block {}".to_vec()))?;
/// bundle.add_file(FileRecord::new("mixins.css", b"".to_vec()))?;
/// bundle.add_file(FileRecord::new("variables.css", b"".to_vec()))?;
///
/// let ordered = bundle.into_ordered()?;
/// let stems: Vec<_> = ordered.iter().filter_map(|r| r.file_name()).collect();
/// assert_eq!(stems, ["variables.css", "mixins.css", "block.css"]);
/// # Ok::<(), strata::StrataError>(())
/// ```
#[derive(Debug, Default)]
pub struct Bundle {
    edges: Vec<strata_core::dependency::DependencyEdge>,
    declared: Vec<strata_core::ident::BemIdent>,
    files: Vec<(strata_core::ident::BemIdent, FileRecord)>,
}

impl Bundle {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates one dependency declaration.
    ///
    /// # Arguments
    ///
    /// * `owner_stem` - The declaring entity's stem, with the declaration
    ///   marker already stripped
    /// * `source` - The declaration document text
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Parse`] when the owner stem does not follow
    /// BEM naming or the document fits no recognized shape. Empty documents
    /// are fine and contribute no edges.
    pub fn add_declaration(&mut self, owner_stem: &str, source: &str) -> Result<(), StrataError> {
        let owner = parse_stem(owner_stem)?;
        let edges = parse_declaration(owner, source)?;
        self.declared.push(owner);
        self.edges.extend(edges);
        Ok(())
    }

    /// Buffers one payload file for ordering.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Parse`] when the file-name stem does not
    /// follow BEM naming.
    pub fn add_file(&mut self, record: FileRecord) -> Result<(), StrataError> {
        let stem = file_stem(record.path()).ok_or_else(|| {
            ParseError::InvalidNaming(record.file_name().unwrap_or_default().to_string())
        })?;
        let ident = parse_stem(stem)?;
        self.files.push((ident, record));
        Ok(())
    }

    /// Computes the order and re-emits the buffered payload files.
    ///
    /// Builds the dependency graph from declared edges, registered file
    /// identifiers, and implicit structural edges, weighs every node by its
    /// longest dependency chain, and sorts the files by ascending weight.
    /// Ties keep arrival order. Entities that appear only in declarations
    /// take part in weighting but produce no output records.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::CircularDependency`] when the merged graph
    /// contains a cycle. No files are emitted in that case.
    pub fn into_ordered(self) -> Result<Vec<FileRecord>, StrataError> {
        info!(files = self.files.len(), declarations = self.declared.len(); "Ordering bundle");

        let mut graph = DependencyGraph::new();
        for ident in &self.declared {
            graph.add_node(*ident);
        }
        for (ident, _) in &self.files {
            graph.add_node(*ident);
        }
        for edge in &self.edges {
            graph.add_edge(*edge);
        }
        graph.add_structural_edges();
        let top_level = graph
            .nodes()
            .filter(|node| graph.dependents_of(node).next().is_none())
            .count();
        debug!(nodes = graph.node_count(), edges = graph.edge_count(), top_level = top_level; "Graph built");

        let weights = order::weigh(&graph)?;

        let mut files = self.files;
        // Stable: equal weights keep arrival order.
        files.sort_by_key(|(ident, _)| weights[ident]);

        info!(files = files.len(); "Bundle ordered");
        Ok(files.into_iter().map(|(_, record)| record).collect())
    }
}

/// Orderer for mixed streams of declarations and payload files.
///
/// This is the high-level entry point: it classifies records by the
/// configured declaration marker, routes them into a [`Bundle`], and
/// returns the ordered payload. Declaration documents produce no output
/// records of their own.
///
/// # Examples
///
/// ```
/// use strata::{BundleOrderer, config::AppConfig, file::FileRecord};
///
/// let orderer = BundleOrderer::new(AppConfig::default());
///
/// let files = vec![
///     FileRecord::new("block.deps.yaml", b"- mixins\n".to_vec()),
///     FileRecord::new("block.css", b".block {}".to_vec()),
///     FileRecord::new("mixins.css", b"".to_vec()),
/// ];
///
/// let ordered = orderer.order(files)?;
/// let names: Vec<_> = ordered.iter().filter_map(|r| r.file_name()).collect();
/// assert_eq!(names, ["mixins.css", "block.css"]);
/// # Ok::<(), strata::StrataError>(())
/// ```
#[derive(Debug, Default)]
pub struct BundleOrderer {
    config: AppConfig,
}

impl BundleOrderer {
    /// Create a new orderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Orders one batch of mixed input records.
    ///
    /// Records named `<owner>.<marker>.yaml` (or `.yml`) are consumed as
    /// declarations; everything else is payload and comes back re-emitted
    /// once, contents untouched, in dependency order.
    ///
    /// # Errors
    ///
    /// Any parse, cycle, or encoding failure is terminal for the whole
    /// batch: no records are released.
    pub fn order(&self, records: Vec<FileRecord>) -> Result<Vec<FileRecord>, StrataError> {
        let marker = self.config.naming().deps_marker();
        let mut bundle = Bundle::new();

        for record in records {
            let name = record.file_name().unwrap_or_default().to_string();
            match declaration_owner(&name, marker) {
                Some(owner) => {
                    let owner = owner.to_string();
                    let source = str::from_utf8(record.contents()).map_err(|err| {
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("declaration `{name}` is not valid UTF-8: {err}"),
                        )
                    })?;
                    debug!(name = name.as_str(), owner = owner.as_str(); "Consuming declaration");
                    bundle.add_declaration(&owner, source)?;
                }
                None => bundle.add_file(record)?,
            }
        }

        bundle.into_ordered()
    }
}
