//! PointerMap: stable numbering of node identities.
//!
//! The reachability pass registers every node it reaches through an owning
//! edge with [`PointerMap::add`]. Registration order is pre-order of owning
//! edges, and the position of an identity in that order is its
//! [`SequenceNumber`]. The completeness pass then resolves link targets with
//! [`PointerMap::get`].
//!
//! Registration is first-wins: a second `add` of the same identity is a
//! [`NotWellFormed::DuplicateNode`] and does not disturb the numbering.

use indexmap::IndexSet;
use tracing::trace;

use crate::edge::Cardinality;
use crate::error::NotWellFormed;
use crate::id::{NodeIdentity, SequenceNumber};
use crate::link::LinkEdge;
use crate::node::Node;
use crate::owned::OwnedEdge;

/// Map from node identity to sequence number, built during the
/// reachability pass.
#[derive(Debug, Clone, Default)]
pub struct PointerMap {
    /// Registered identities; the insertion index is the sequence number.
    seen: IndexSet<NodeIdentity>,
}

impl PointerMap {
    /// Creates an empty map. The first registration gets `SequenceNumber(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `identity` and returns its new sequence number.
    ///
    /// Returns [`NotWellFormed::DuplicateNode`] naming `type_name` if the
    /// identity was already registered.
    pub fn add(
        &mut self,
        identity: NodeIdentity,
        type_name: &str,
    ) -> Result<SequenceNumber, NotWellFormed> {
        let (index, inserted) = self.seen.insert_full(identity);
        if !inserted {
            trace!(%identity, type_name, "node registered twice");
            return Err(NotWellFormed::DuplicateNode {
                type_name: type_name.to_string(),
            });
        }
        Ok(SequenceNumber(index))
    }

    /// Returns the sequence number of a previously registered identity.
    ///
    /// Returns [`NotWellFormed::UnresolvedReference`] naming `type_name` if
    /// the identity was never registered.
    pub fn get(
        &self,
        identity: NodeIdentity,
        type_name: &str,
    ) -> Result<SequenceNumber, NotWellFormed> {
        match self.seen.get_index_of(&identity) {
            Some(index) => Ok(SequenceNumber(index)),
            None => {
                trace!(%identity, type_name, "link target not registered");
                Err(NotWellFormed::UnresolvedReference {
                    type_name: type_name.to_string(),
                })
            }
        }
    }

    /// Registers the node held by an owning edge.
    ///
    /// Returns `Ok(None)` for an empty edge, which registers nothing.
    pub fn add_edge<T: Node, C: Cardinality>(
        &mut self,
        edge: &OwnedEdge<T, C>,
    ) -> Result<Option<SequenceNumber>, NotWellFormed> {
        edge.identity()
            .map(|identity| self.add(identity, T::TYPE_NAME))
            .transpose()
    }

    /// Resolves the target of a link.
    ///
    /// Returns `Ok(None)` for an empty or expired link.
    pub fn get_link<T: Node, C: Cardinality>(
        &self,
        link: &LinkEdge<T, C>,
    ) -> Result<Option<SequenceNumber>, NotWellFormed> {
        link.identity()
            .map(|identity| self.get(identity, T::TYPE_NAME))
            .transpose()
    }

    /// Returns the sequence number of `identity` if it is registered.
    pub fn sequence_of(&self, identity: NodeIdentity) -> Option<SequenceNumber> {
        self.seen.get_index_of(&identity).map(SequenceNumber)
    }

    /// Returns `true` if `identity` is registered.
    pub fn contains(&self, identity: NodeIdentity) -> bool {
        self.seen.contains(&identity)
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Iterates over registered identities in sequence order.
    pub fn identities(&self) -> impl Iterator<Item = NodeIdentity> + '_ {
        self.seen.iter().copied()
    }
}
