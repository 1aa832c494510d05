//! Identity newtypes for tree nodes.
//!
//! A [`NodeIdentity`] is the runtime identity of a node: the address of the
//! shared allocation that owns it. Two edges refer to the same node exactly
//! when their identities are equal. A [`SequenceNumber`] is the stable number
//! a [`PointerMap`](crate::pointer_map::PointerMap) hands out for an identity
//! during the reachability pass.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

/// Runtime identity of a node, derived from the address of its allocation.
///
/// Identities are only meaningful while the node is alive. They are never
/// serialized; use [`SequenceNumber`] for anything that leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIdentity(usize);

impl NodeIdentity {
    /// Identity of the node behind a strong handle.
    pub fn of<T>(rc: &Rc<RefCell<T>>) -> Self {
        NodeIdentity(Rc::as_ptr(rc).cast::<()>() as usize)
    }

    /// Identity of the node behind a weak handle, or `None` once expired.
    pub fn of_weak<T>(weak: &Weak<RefCell<T>>) -> Option<Self> {
        if weak.strong_count() == 0 {
            None
        } else {
            Some(NodeIdentity(weak.as_ptr().cast::<()>() as usize))
        }
    }

}

/// Stable number assigned to a node in pre-order of owning edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceNumber(pub usize);

// Display implementations.

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_allocation_same_identity() {
        let a = Rc::new(RefCell::new(1u32));
        let b = Rc::clone(&a);
        assert_eq!(NodeIdentity::of(&a), NodeIdentity::of(&b));
    }

    #[test]
    fn distinct_allocations_differ() {
        let a = Rc::new(RefCell::new(1u32));
        let b = Rc::new(RefCell::new(1u32));
        assert_ne!(NodeIdentity::of(&a), NodeIdentity::of(&b));
    }

    #[test]
    fn weak_identity_matches_strong() {
        let a = Rc::new(RefCell::new("node"));
        let weak = Rc::downgrade(&a);
        assert_eq!(NodeIdentity::of_weak(&weak), Some(NodeIdentity::of(&a)));
    }

    #[test]
    fn expired_weak_has_no_identity() {
        let weak = {
            let a = Rc::new(RefCell::new(0u8));
            Rc::downgrade(&a)
        };
        assert_eq!(NodeIdentity::of_weak(&weak), None);
        assert_eq!(NodeIdentity::of_weak(&Weak::<RefCell<u8>>::new()), None);
    }

    #[test]
    fn sequence_number_display() {
        assert_eq!(format!("{}", SequenceNumber(7)), "7");
    }

    #[test]
    fn sequence_number_serde_roundtrip() {
        let seq = SequenceNumber(42);
        let json = serde_json::to_string(&seq).unwrap();
        let back: SequenceNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(seq, back);
    }
}
