//! Runtime support for generated AST/IR trees.
//!
//! Generated node types declare their fields exclusively with the six edge
//! containers defined here:
//!
//! | Container | Owns | Cardinality |
//! |---|---|---|
//! | [`Maybe`] | yes | 0..1 |
//! | [`One`] | yes | 1 |
//! | [`Any`] | yes | 0..N, ordered |
//! | [`Many`] | yes | 1..N, ordered |
//! | [`OptLink`] | no | 0..1 |
//! | [`Link`] | no | 1 |
//!
//! Owning edges must form a tree; links may point anywhere inside it. The
//! [`Completable`] contract checks exactly that in two passes over a
//! [`PointerMap`].
//!
//! # Modules
//!
//! - [`edge`]: edge kinds and the `Optional`/`Required` cardinality markers
//! - [`error`]: `NotWellFormed` and `AccessError`
//! - [`id`]: node identities and sequence numbers
//! - [`node`]: the node capability contract
//! - [`owned`]: `Maybe` / `One`
//! - [`sequence`]: `Any` / `Many`
//! - [`link`]: `OptLink` / `Link`
//! - [`pointer_map`]: identity registration for the well-formedness check

pub mod edge;
pub mod error;
pub mod id;
pub mod link;
pub mod node;
pub mod owned;
pub mod pointer_map;
pub mod sequence;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use edge::{Cardinality, EdgeKind, Optional, Required};
pub use error::{AccessError, NotWellFormed};
pub use id::{NodeIdentity, SequenceNumber};
pub use link::{Link, LinkEdge, OptLink};
pub use node::{Completable, Node, Variant, Visitable};
pub use owned::{make, Maybe, One, OwnedEdge};
pub use pointer_map::PointerMap;
pub use sequence::{Any, Many, Sequence};
