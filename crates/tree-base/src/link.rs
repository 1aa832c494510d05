//! Weak references: [`OptLink`] (0..1) and [`Link`] (exactly 1).
//!
//! A link observes a node owned elsewhere in the same tree without keeping
//! it alive. Links may point anywhere, including at an ancestor, and any
//! number of links may share a target. When the last owning edge releases
//! the target the link reads as empty; there is no window in which it can
//! observe a half-destroyed node.
//!
//! Links are never re-targeted by `copy` or `deep_clone`: a cloned subtree's
//! links keep pointing into the original tree.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use crate::edge::{Cardinality, EdgeKind, Optional, Required};
use crate::error::{AccessError, NotWellFormed};
use crate::id::NodeIdentity;
use crate::node::{Completable, Node, Variant, Visitable};
use crate::owned::{Maybe, OwnedEdge};
use crate::pointer_map::PointerMap;

/// Non-owning reference to at most one node of family `T`.
pub struct LinkEdge<T, C> {
    val: Weak<RefCell<T>>,
    _cardinality: PhantomData<C>,
}

/// Optional weak reference (0..1).
pub type OptLink<T> = LinkEdge<T, Optional>;

/// Mandatory weak reference (exactly 1 once the tree is complete).
pub type Link<T> = LinkEdge<T, Required>;

impl<T, C> LinkEdge<T, C> {
    /// Creates an empty link.
    pub fn new() -> Self {
        LinkEdge {
            val: Weak::new(),
            _cardinality: PhantomData,
        }
    }

    /// Creates a link to the node held by `target`, or an empty link if
    /// `target` is empty.
    pub fn to<C2>(target: &OwnedEdge<T, C2>) -> Self {
        let mut link = Self::new();
        link.set(target);
        link
    }

    /// Creates a link to the same target as another link.
    pub fn from_link<C2>(other: &LinkEdge<T, C2>) -> Self {
        LinkEdge {
            val: other.val.clone(),
            _cardinality: PhantomData,
        }
    }

    /// Points the link at the node held by `target`, or empties it if
    /// `target` is empty.
    pub fn set<C2>(&mut self, target: &OwnedEdge<T, C2>) {
        self.val = target.as_rc().map(Rc::downgrade).unwrap_or_default();
    }

    /// Empties the link.
    pub fn reset(&mut self) {
        self.val = Weak::new();
    }

    /// Returns `true` if the link was never set, was reset, or its target has
    /// been destroyed.
    pub fn is_empty(&self) -> bool {
        self.val.strong_count() == 0
    }

    /// Number of live targets: 0 or 1.
    pub fn len(&self) -> usize {
        usize::from(!self.is_empty())
    }

    /// Identity of the target, or `None` if empty or expired.
    pub fn identity(&self) -> Option<NodeIdentity> {
        NodeIdentity::of_weak(&self.val)
    }

    /// Returns `true` if this link targets the node held by `target`.
    ///
    /// An empty link matches an empty edge.
    pub fn links_to<C2>(&self, target: &OwnedEdge<T, C2>) -> bool {
        self.identity() == target.identity()
    }

    /// Reinterprets the link with another cardinality, keeping the target.
    pub fn into_cardinality<C2>(self) -> LinkEdge<T, C2> {
        LinkEdge {
            val: self.val,
            _cardinality: PhantomData,
        }
    }
}

impl<T: Node, C: Cardinality> LinkEdge<T, C> {
    /// The container kind, for diagnostics.
    pub fn kind() -> EdgeKind {
        if C::REQUIRED {
            EdgeKind::Link
        } else {
            EdgeKind::OptLink
        }
    }

    /// Returns a strong handle to the target.
    ///
    /// Fails with [`AccessError::ExpiredReference`] if the link is empty or
    /// its target has been destroyed.
    pub fn target(&self) -> Result<Rc<RefCell<T>>, AccessError> {
        self.val.upgrade().ok_or_else(|| AccessError::ExpiredReference {
            type_name: T::TYPE_NAME.to_string(),
        })
    }

    /// Runs `f` on the borrowed target.
    ///
    /// Fails with [`AccessError::ExpiredReference`] if the link is empty or
    /// expired and with [`AccessError::Borrowed`] if the target is mutably
    /// borrowed.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, AccessError> {
        let rc = self.target()?;
        let node = rc.try_borrow().map_err(|_| AccessError::Borrowed {
            type_name: T::TYPE_NAME.to_string(),
        })?;
        Ok(f(&node))
    }

    /// Runs `f` on the mutably borrowed target.
    ///
    /// Fails with [`AccessError::ExpiredReference`] if the link is empty or
    /// expired and with [`AccessError::Borrowed`] if the target is already
    /// borrowed.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, AccessError> {
        let rc = self.target()?;
        let mut node = rc.try_borrow_mut().map_err(|_| AccessError::Borrowed {
            type_name: T::TYPE_NAME.to_string(),
        })?;
        Ok(f(&mut node))
    }

    /// Same-identity downcast to kind `S`.
    ///
    /// Returns a `Maybe` sharing the target when it is alive and an `S`, and
    /// an empty `Maybe` otherwise.
    pub fn as_variant<S>(&self) -> Maybe<T>
    where
        T: Variant<S>,
    {
        match self.val.upgrade() {
            Some(rc) => Maybe::from_rc(rc).as_variant::<S>(),
            None => Maybe::new(),
        }
    }

    /// Forwards `visitor` to the target, if it is alive.
    ///
    /// # Panics
    ///
    /// Panics if the target is mutably borrowed.
    pub fn visit<V: ?Sized>(&self, visitor: &mut V)
    where
        T: Visitable<V>,
    {
        if let Some(rc) = self.val.upgrade() {
            rc.borrow().accept(visitor);
        }
    }
}

impl<T: Node, C: Cardinality> Completable for LinkEdge<T, C> {
    /// Links own nothing, so they register nothing.
    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        match map.get_link(self)? {
            Some(_) => Ok(()),
            None if C::REQUIRED => Err(NotWellFormed::RequiredEdgeEmpty {
                edge: Self::kind(),
                type_name: T::TYPE_NAME.to_string(),
            }),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T, C> Default for LinkEdge<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// The clone observes the same target.
impl<T, C> Clone for LinkEdge<T, C> {
    fn clone(&self) -> Self {
        Self::from_link(self)
    }
}

/// Structural equality through the targets; an expired link equals a link
/// that was never set. Links to the same target are equal without comparing
/// it, so a back-reference compared against itself does not recurse.
///
/// # Panics
///
/// Panics if a compared target is mutably borrowed.
impl<T: PartialEq, C, C2> PartialEq<LinkEdge<T, C2>> for LinkEdge<T, C> {
    fn eq(&self, other: &LinkEdge<T, C2>) -> bool {
        match (self.val.upgrade(), other.val.upgrade()) {
            (Some(a), Some(b)) => Rc::ptr_eq(&a, &b) || *a.borrow() == *b.borrow(),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Prints the target identity only; links may form cycles.
impl<T, C> fmt::Debug for LinkEdge<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NodeIdentity::of_weak(&self.val) {
            Some(identity) => write!(f, "Link({identity})"),
            None => f.write_str("Link(<empty>)"),
        }
    }
}

impl<T, C, C2> From<&OwnedEdge<T, C2>> for LinkEdge<T, C> {
    fn from(target: &OwnedEdge<T, C2>) -> Self {
        Self::to(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owned::{make, One};
    use crate::test_support::{Leaf, Shape, Square};

    #[test]
    fn new_link_is_empty() {
        let link: OptLink<Leaf> = OptLink::new();
        assert!(link.is_empty());
        assert_eq!(link.len(), 0);
        assert!(matches!(
            link.target(),
            Err(AccessError::ExpiredReference { .. })
        ));
    }

    #[test]
    fn link_observes_without_owning() {
        let owner = make::<Leaf>(Leaf::new(5));
        let link = Link::to(&owner);
        assert!(!link.is_empty());
        assert!(link.links_to(&owner));
        assert_eq!(link.with(|leaf| leaf.value).unwrap(), 5);
        assert_eq!(Rc::strong_count(owner.as_rc().unwrap()), 1);
    }

    #[test]
    fn link_expires_with_last_owner() {
        let mut owner = make::<Leaf>(Leaf::new(5));
        let second: One<Leaf> = owner.clone();
        let link: Link<Leaf> = Link::to(&owner);

        owner.reset();
        assert!(!link.is_empty());

        drop(second);
        assert!(link.is_empty());
        assert_eq!(
            link.with(|leaf| leaf.value).unwrap_err(),
            AccessError::ExpiredReference {
                type_name: "Leaf".into()
            }
        );
    }

    #[test]
    fn with_mut_writes_through() {
        let owner = make::<Leaf>(Leaf::new(1));
        let link: OptLink<Leaf> = (&owner).into();
        link.with_mut(|leaf| leaf.value = 7).unwrap();
        assert_eq!(owner.get().unwrap().value, 7);
    }

    #[test]
    fn links_to_compares_identity() {
        let a = make::<Leaf>(Leaf::new(1));
        let b = make::<Leaf>(Leaf::new(1));
        let link: Link<Leaf> = Link::to(&a);
        assert!(link.links_to(&a));
        assert!(!link.links_to(&b));
    }

    #[test]
    fn equality_through_targets() {
        let a = make::<Leaf>(Leaf::new(1));
        let b = make::<Leaf>(Leaf::new(1));
        let c = make::<Leaf>(Leaf::new(2));
        assert_eq!(Link::<Leaf>::to(&a), Link::<Leaf>::to(&b));
        assert_ne!(Link::<Leaf>::to(&a), Link::<Leaf>::to(&c));
        assert_ne!(Link::<Leaf>::to(&a), Link::<Leaf>::new());
    }

    #[test]
    fn expired_equals_never_set() {
        let expired: OptLink<Leaf> = {
            let owner = make::<Leaf>(Leaf::new(1));
            OptLink::to(&owner)
        };
        assert_eq!(expired, OptLink::<Leaf>::new());
    }

    #[test]
    fn as_variant_on_link() {
        let owner = make::<Shape>(Square { side: 3 });
        let link: Link<Shape> = Link::to(&owner);
        assert!(link.as_variant::<Square>().ptr_eq(&owner));
        assert!(link.as_variant::<Leaf>().is_empty());
    }

    #[test]
    fn from_link_shares_target() {
        let owner = make::<Leaf>(Leaf::new(1));
        let opt: OptLink<Leaf> = OptLink::to(&owner);
        let req: Link<Leaf> = Link::from_link(&opt);
        assert!(req.links_to(&owner));
    }

    #[test]
    fn required_link_empty_is_incomplete() {
        let map = PointerMap::new();
        assert_eq!(
            Link::<Leaf>::new().check_complete(&map),
            Err(NotWellFormed::RequiredEdgeEmpty {
                edge: EdgeKind::Link,
                type_name: "Leaf".into()
            })
        );
        assert!(OptLink::<Leaf>::new().check_complete(&map).is_ok());
    }

    #[test]
    fn unregistered_target_is_unresolved() {
        let owner = make::<Leaf>(Leaf::new(1));
        let link: OptLink<Leaf> = OptLink::to(&owner);
        let mut map = PointerMap::new();
        assert_eq!(
            link.check_complete(&map),
            Err(NotWellFormed::UnresolvedReference {
                type_name: "Leaf".into()
            })
        );

        owner.find_reachable(&mut map).unwrap();
        assert!(link.check_complete(&map).is_ok());
    }

    #[test]
    fn set_to_empty_edge_clears() {
        let owner = make::<Leaf>(Leaf::new(1));
        let mut link: Link<Leaf> = Link::to(&owner);
        link.set(&One::<Leaf>::new());
        assert!(link.is_empty());
        link.set(&owner);
        link.reset();
        assert!(link.is_empty());
    }
}
