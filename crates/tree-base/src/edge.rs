//! Edge kinds and cardinality markers shared by all containers.
//!
//! Every field of a generated node is one of six containers. They differ in
//! two independent ways: whether they own their target (owning vs. weak) and
//! whether an empty edge is acceptable once the tree is complete. The second
//! axis is expressed at the type level with the [`Cardinality`] markers
//! [`Optional`] and [`Required`], so `Maybe`/`One`, `Any`/`Many` and
//! `OptLink`/`Link` each share a single implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Edge kinds
// ---------------------------------------------------------------------------

/// The six edge containers a node field can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Optional owning edge (0..1).
    Maybe,
    /// Mandatory owning edge (exactly 1).
    One,
    /// Ordered owning list (0..N).
    Any,
    /// Non-empty ordered owning list (1..N).
    Many,
    /// Optional weak reference (0..1).
    OptLink,
    /// Mandatory weak reference (exactly 1).
    Link,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeKind::Maybe => "Maybe",
            EdgeKind::One => "One",
            EdgeKind::Any => "Any",
            EdgeKind::Many => "Many",
            EdgeKind::OptLink => "OptLink",
            EdgeKind::Link => "Link",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Cardinality markers
// ---------------------------------------------------------------------------

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Optional {}
    impl Sealed for super::Required {}
}

/// Type-level marker selecting whether an edge may stay empty.
///
/// Sealed: the only implementors are [`Optional`] and [`Required`].
pub trait Cardinality: sealed::Sealed + 'static {
    /// Whether completeness checking rejects an empty edge.
    const REQUIRED: bool;
}

/// Marker for edges that may legitimately be empty forever.
#[derive(Debug)]
pub enum Optional {}

/// Marker for edges that must be filled before the tree is complete.
#[derive(Debug)]
pub enum Required {}

impl Cardinality for Optional {
    const REQUIRED: bool = false;
}

impl Cardinality for Required {
    const REQUIRED: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_constants() {
        assert!(Required::REQUIRED);
        assert!(!Optional::REQUIRED);
    }

    #[test]
    fn edge_kind_display() {
        assert_eq!(EdgeKind::OptLink.to_string(), "OptLink");
        assert_eq!(EdgeKind::Many.to_string(), "Many");
    }

    #[test]
    fn serde_roundtrip_edge_kind() {
        for kind in &[
            EdgeKind::Maybe,
            EdgeKind::One,
            EdgeKind::Any,
            EdgeKind::Many,
            EdgeKind::OptLink,
            EdgeKind::Link,
        ] {
            let json = serde_json::to_string(kind).unwrap();
            let back: EdgeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, back);
        }
    }
}
