//! Ordered dependency pairs between BEM entities.

use std::fmt;

use crate::ident::BemIdent;

/// A single dependency edge: `dependent` must come after `dependency` in the
/// final output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    dependent: BemIdent,
    dependency: BemIdent,
}

impl DependencyEdge {
    /// Creates an edge stating that `dependent` relies on `dependency`.
    pub fn new(dependent: BemIdent, dependency: BemIdent) -> Self {
        Self {
            dependent,
            dependency,
        }
    }

    /// The entity that relies on the other.
    pub fn dependent(&self) -> BemIdent {
        self.dependent
    }

    /// The entity relied upon.
    pub fn dependency(&self) -> BemIdent {
        self.dependency
    }

    /// Returns `true` when both endpoints name the same entity.
    pub fn is_self_edge(&self) -> bool {
        self.dependent == self.dependency
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.dependent, self.dependency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let edge = DependencyEdge::new(
            BemIdent::block("button"),
            BemIdent::block("mixins"),
        );

        assert_eq!(edge.dependent(), BemIdent::block("button"));
        assert_eq!(edge.dependency(), BemIdent::block("mixins"));
    }

    #[test]
    fn test_self_edge() {
        let looped = DependencyEdge::new(BemIdent::block("a"), BemIdent::block("a"));
        let plain = DependencyEdge::new(BemIdent::block("a"), BemIdent::block("b"));

        assert!(looped.is_self_edge());
        assert!(!plain.is_self_edge());
    }

    #[test]
    fn test_display() {
        let edge = DependencyEdge::new(
            BemIdent::block("menu").with_elem("item"),
            BemIdent::block("menu"),
        );

        assert_eq!(edge.to_string(), "menu__item -> menu");
    }
}
