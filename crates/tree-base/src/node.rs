//! The capability contract every generated node type implements.
//!
//! - [`Completable`] is shared by nodes and edge containers: the two passes
//!   of the well-formedness engine plus the provided `check_well_formed` /
//!   `is_well_formed` entry points.
//! - [`Node`] adds the static type tag and the copy/clone protocol.
//! - [`Variant`] is the safe downcast from a node family (a closed enum of
//!   concrete kinds) to one of its kinds.
//! - [`Visitable`] is the hook containers use to forward visitor calls; the
//!   actual double dispatch is the node type's business.
//!
//! # Well-formedness
//!
//! A tree is well-formed when:
//! - no node is reachable through two owning edges;
//! - every `One`, `Link` and `Many` edge is filled;
//! - every filled `Link`/`OptLink` targets a node reachable from the root
//!   through owning edges.
//!
//! The check is all-or-nothing: the first violation is returned and the tree
//! is left untouched, so callers may repair it and check again.

use tracing::{debug, trace};

use crate::error::NotWellFormed;
use crate::pointer_map::PointerMap;

/// Participation in the two-pass well-formedness check.
pub trait Completable {
    /// Pass 1: registers every node reachable through owning edges with
    /// `map`, in declaration order, and recurses into it.
    ///
    /// Fails with [`NotWellFormed::DuplicateNode`] as soon as a node is
    /// registered twice.
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed>;

    /// Pass 2: asserts that mandatory edges are filled and that links
    /// resolve against the registrations made by pass 1.
    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed>;

    /// Runs both passes against a fresh [`PointerMap`].
    fn check_well_formed(&self) -> Result<(), NotWellFormed> {
        let mut map = PointerMap::new();
        self.find_reachable(&mut map)?;
        trace!(nodes = map.len(), "reachability pass complete");
        self.check_complete(&map)?;
        trace!(nodes = map.len(), "completeness pass complete");
        Ok(())
    }

    /// Returns whether [`check_well_formed`](Self::check_well_formed)
    /// succeeds.
    fn is_well_formed(&self) -> bool {
        match self.check_well_formed() {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "tree is not well-formed");
                false
            }
        }
    }
}

/// A generated tree node.
///
/// `Clone` on a node must be field-wise: container fields share their
/// targets when cloned, so the derived implementation is exactly the shallow
/// [`copy`](Node::copy). [`deep_clone`](Node::deep_clone) must instead call
/// `deep_clone` on every owning field. Link fields are cloned as-is in both
/// cases and keep pointing at the original targets.
pub trait Node: Completable + Clone + PartialEq + 'static {
    /// Stable type tag used verbatim in diagnostics.
    const TYPE_NAME: &'static str;

    /// Shallow copy: a new node whose owning edges reference the same
    /// children as `self`.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Deep copy: a new node whose owned subtree is fully independent of
    /// `self`.
    fn deep_clone(&self) -> Self;
}

/// Safe downcast from a node family to one of its concrete kinds.
///
/// Implemented by generated family enums once per kind, usually next to a
/// `From<S>` impl that provides the upcast.
pub trait Variant<S>: Node {
    /// Returns the kind if this node is one.
    fn try_as(&self) -> Option<&S>;

    /// Returns the kind mutably if this node is one.
    fn try_as_mut(&mut self) -> Option<&mut S>;
}

/// Accepts a visitor of type `V`.
///
/// Containers forward `visit` calls to `accept` on their present content.
pub trait Visitable<V: ?Sized> {
    fn accept(&self, visitor: &mut V);
}
