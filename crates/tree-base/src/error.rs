//! Error types for tree-base.
//!
//! Two families, both `thiserror` enums:
//! - [`NotWellFormed`]: structural violations found by the well-formedness
//!   engine. A check stops at the first one.
//! - [`AccessError`]: programming errors when dereferencing or indexing an
//!   edge, independent of well-formedness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::edge::EdgeKind;

/// A tree failed the well-formedness check.
///
/// Every variant carries the static type tag of the edge involved so the
/// rendered message can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum NotWellFormed {
    /// The same node is reachable through two owning edges.
    #[error("duplicate node of type {type_name} in tree")]
    DuplicateNode { type_name: String },

    /// A non-empty link targets a node that the reachability pass never saw.
    #[error("link to node of type {type_name} does not resolve to a node in the tree")]
    UnresolvedReference { type_name: String },

    /// A `One` or `Link` edge is empty (or expired).
    #[error("'{edge}' edge of type {type_name} is empty")]
    RequiredEdgeEmpty { edge: EdgeKind, type_name: String },

    /// A `Many` edge has no elements.
    #[error("'Many' edge of type {type_name} is empty")]
    RequiredListEmpty { type_name: String },

    /// A node was mutably borrowed while the tree was being checked.
    #[error("node of type {type_name} is mutably borrowed during the check")]
    NodeBorrowed { type_name: String },
}

impl NotWellFormed {
    /// The type tag reported by this violation.
    pub fn type_name(&self) -> &str {
        match self {
            NotWellFormed::DuplicateNode { type_name }
            | NotWellFormed::UnresolvedReference { type_name }
            | NotWellFormed::RequiredEdgeEmpty { type_name, .. }
            | NotWellFormed::RequiredListEmpty { type_name }
            | NotWellFormed::NodeBorrowed { type_name } => type_name,
        }
    }
}

/// Dereferencing or indexing an edge failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum AccessError {
    /// Dereferenced an empty `Maybe`/`One`.
    #[error("dereferencing empty Maybe/One edge of type {type_name}")]
    EmptyReference { type_name: String },

    /// Dereferenced an empty or expired `OptLink`/`Link`.
    #[error("dereferencing empty or expired (Opt)Link edge of type {type_name}")]
    ExpiredReference { type_name: String },

    /// Indexed an `Any`/`Many` past its end.
    #[error("index {index} out of range for Any/Many edge of type {type_name} with {len} element(s)")]
    OutOfRange {
        type_name: String,
        index: usize,
        len: usize,
    },

    /// The node is currently borrowed in a conflicting way.
    #[error("node of type {type_name} is already borrowed")]
    Borrowed { type_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_edge_message() {
        let err = NotWellFormed::RequiredEdgeEmpty {
            edge: EdgeKind::One,
            type_name: "Block".into(),
        };
        assert_eq!(err.to_string(), "'One' edge of type Block is empty");
        assert_eq!(err.type_name(), "Block");
    }

    #[test]
    fn link_edge_message() {
        let err = NotWellFormed::RequiredEdgeEmpty {
            edge: EdgeKind::Link,
            type_name: "Param".into(),
        };
        assert_eq!(err.to_string(), "'Link' edge of type Param is empty");
    }

    #[test]
    fn out_of_range_message() {
        let err = AccessError::OutOfRange {
            type_name: "Expr".into(),
            index: 3,
            len: 2,
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"index 3 out of range for Any/Many edge of type Expr with 2 element(s)"
        );
    }

    #[test]
    fn serde_roundtrip_not_well_formed() {
        let err = NotWellFormed::DuplicateNode {
            type_name: "Statement".into(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: NotWellFormed = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
