//! Cycle detection and depth-weighted ordering.
//!
//! The sorter runs in two passes over a finished [`DependencyGraph`]:
//! cycle detection first, then a memoized longest-chain weighting. Both use
//! explicit stacks, so pathological graphs cannot overflow the call stack.
//!
//! A node's weight is the length of its longest dependency chain: 0 for
//! nodes with no dependencies, otherwise 1 + the maximum dependency weight.
//! Lower weight sorts earlier. Depth wins over fan-out: a node reaching one
//! deep dependency and several shallow ones is weighted by the deep chain.

use std::collections::HashMap;

use log::debug;

use strata_core::ident::BemIdent;

use crate::{error::StrataError, graph::DependencyGraph};

/// Traversal state for one node during cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// The node is on the current traversal stack.
    OnStack,
    /// The node and everything reachable from it is cycle-free.
    Finished,
}

/// Computes the weight of every node in the graph.
///
/// # Errors
///
/// Returns [`StrataError::CircularDependency`] when the graph contains a
/// cycle. No weights are produced in that case.
pub(crate) fn weigh(graph: &DependencyGraph) -> Result<HashMap<BemIdent, u32>, StrataError> {
    detect_cycles(graph)?;
    let weights = assign_weights(graph);
    debug!(nodes = weights.len(); "Weights assigned");
    Ok(weights)
}

/// Depth-first cycle check with an on-stack marker set.
///
/// Revisiting a node that is currently on the stack means the dependency
/// chain loops back on itself; that node is reported in the error.
fn detect_cycles(graph: &DependencyGraph) -> Result<(), StrataError> {
    let mut marks: HashMap<BemIdent, Mark> = HashMap::new();

    for root in graph.nodes() {
        if marks.contains_key(&root) {
            continue;
        }

        // Stack entries carry the index of the next dependency to visit.
        let mut stack: Vec<(BemIdent, usize)> = vec![(root, 0)];
        marks.insert(root, Mark::OnStack);

        while let Some((node, next)) = stack.last_mut() {
            let node = *node;
            match graph.dependency_at(&node, *next) {
                Some(dep) => {
                    *next += 1;
                    match marks.get(&dep) {
                        Some(Mark::OnStack) => {
                            return Err(StrataError::CircularDependency(dep));
                        }
                        Some(Mark::Finished) => {}
                        None => {
                            marks.insert(dep, Mark::OnStack);
                            stack.push((dep, 0));
                        }
                    }
                }
                None => {
                    marks.insert(node, Mark::Finished);
                    stack.pop();
                }
            }
        }
    }

    Ok(())
}

/// Memoized longest-chain weighting.
///
/// A node is weighed once all of its dependencies are; unresolved
/// dependencies are pushed and revisited. Requires an acyclic graph.
fn assign_weights(graph: &DependencyGraph) -> HashMap<BemIdent, u32> {
    let mut weights: HashMap<BemIdent, u32> = HashMap::new();

    for root in graph.nodes() {
        if weights.contains_key(&root) {
            continue;
        }

        let mut stack = vec![root];
        while let Some(node) = stack.last().copied() {
            if weights.contains_key(&node) {
                stack.pop();
                continue;
            }

            let mut deepest: Option<u32> = None;
            let mut ready = true;
            for dep in graph.dependencies_of(&node) {
                match weights.get(&dep) {
                    Some(weight) => {
                        deepest = Some(deepest.map_or(*weight, |d| d.max(*weight)));
                    }
                    None => {
                        stack.push(dep);
                        ready = false;
                    }
                }
            }

            if ready {
                weights.insert(node, deepest.map_or(0, |d| d + 1));
                stack.pop();
            }
        }
    }

    weights
}
