//! The per-batch dependency graph.
//!
//! Nodes are BEM entity identifiers; edges run from a dependent to the
//! entity it depends on. The graph tracks both directions per node so the
//! sorter can walk dependencies and callers can inspect dependents.
//!
//! Edges are deduplicated and self-edges are discarded on insertion.
//! Storage uses insertion-ordered maps so traversal order, and with it the
//! reported cycle node, is deterministic for a given input.

use indexmap::{IndexMap, IndexSet};

use strata_core::{dependency::DependencyEdge, ident::BemIdent};

/// Per-node adjacency: what this node depends on and what depends on it.
#[derive(Debug, Default)]
struct Links {
    dependencies: IndexSet<BemIdent>,
    dependents: IndexSet<BemIdent>,
}

/// Directed dependency graph over entity identifiers, scoped to one batch.
#[derive(Debug, Default)]
pub(crate) struct DependencyGraph {
    nodes: IndexMap<BemIdent, Links>,
    edge_count: usize,
}

impl DependencyGraph {
    /// Creates a new empty graph.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a node, with no edges yet.
    ///
    /// Registering an existing node is a no-op; its edges are kept.
    pub(crate) fn add_node(&mut self, ident: BemIdent) {
        self.nodes.entry(ident).or_default();
    }

    /// Adds a dependency edge, registering both endpoints.
    ///
    /// Self-edges are discarded and duplicate edges collapse to one.
    pub(crate) fn add_edge(&mut self, edge: DependencyEdge) {
        if edge.is_self_edge() {
            return;
        }
        let dependent = edge.dependent();
        let dependency = edge.dependency();
        self.add_node(dependency);
        let inserted = self.nodes.entry(dependent).or_default().dependencies.insert(dependency);
        if inserted {
            self.nodes
                .entry(dependency)
                .or_default()
                .dependents
                .insert(dependent);
            self.edge_count += 1;
        }
    }

    /// Derives the implicit structural edges from identifier shape.
    ///
    /// Run after all explicit registration. Three rules, applied to a
    /// snapshot of the registered nodes:
    ///
    /// 1. an elem identifier depends on its owning block;
    /// 2. a modifier identifier depends on its subject;
    /// 3. an elem-modifier identifier depends on the block-level modifier of
    ///    the same name and value, when that counterpart is registered.
    ///
    /// Rules 1 and 2 register their targets as needed. Rule 3 checks the
    /// registered nodes, so a counterpart only counts when a declaration or
    /// input file mentioned it; rules 1 and 2 never register modifier
    /// identifiers, so pass order cannot affect that check.
    pub(crate) fn add_structural_edges(&mut self) {
        let snapshot: Vec<BemIdent> = self.nodes.keys().copied().collect();
        for ident in &snapshot {
            if let Some(block) = ident.owning_block() {
                self.add_edge(DependencyEdge::new(*ident, block));
            }
            if let Some(subject) = ident.subject() {
                self.add_edge(DependencyEdge::new(*ident, subject));
            }
            if let Some(counterpart) = ident.block_counterpart() {
                if self.contains(&counterpart) {
                    self.add_edge(DependencyEdge::new(*ident, counterpart));
                }
            }
        }
    }

    /// Returns `true` when the identifier is a registered node.
    pub(crate) fn contains(&self, ident: &BemIdent) -> bool {
        self.nodes.contains_key(ident)
    }

    /// Iterates over all registered nodes in insertion order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = BemIdent> + '_ {
        self.nodes.keys().copied()
    }

    /// The number of registered nodes.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of distinct edges.
    pub(crate) fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over the entities `ident` depends on.
    pub(crate) fn dependencies_of(&self, ident: &BemIdent) -> impl Iterator<Item = BemIdent> + '_ {
        self.nodes
            .get(ident)
            .into_iter()
            .flat_map(|links| links.dependencies.iter().copied())
    }

    /// The `index`-th dependency of `ident`, used by explicit-stack walks.
    pub(crate) fn dependency_at(&self, ident: &BemIdent, index: usize) -> Option<BemIdent> {
        self.nodes.get(ident)?.dependencies.get_index(index).copied()
    }

    /// Iterates over the entities that depend on `ident`.
    pub(crate) fn dependents_of(&self, ident: &BemIdent) -> impl Iterator<Item = BemIdent> + '_ {
        self.nodes
            .get(ident)
            .into_iter()
            .flat_map(|links| links.dependents.iter().copied())
    }
}
