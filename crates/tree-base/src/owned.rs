//! Single owning edges: [`Maybe`] (0..1) and [`One`] (exactly 1).
//!
//! Both are [`OwnedEdge`] with a different [`Cardinality`]. An owning edge
//! holds a strong `Rc<RefCell<T>>` handle; the node lives as long as at
//! least one owning edge holds it, and links observing it expire the moment
//! the last one lets go.
//!
//! Cloning an edge with `Clone` shares the handle (the clone refers to the
//! same node identity). Use [`OwnedEdge::copy`] or [`OwnedEdge::deep_clone`]
//! to get a new node.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::edge::{Cardinality, EdgeKind, Optional, Required};
use crate::error::{AccessError, NotWellFormed};
use crate::id::NodeIdentity;
use crate::node::{Completable, Node, Variant, Visitable};
use crate::pointer_map::PointerMap;

/// Owning edge to at most one node of family `T`.
pub struct OwnedEdge<T, C> {
    val: Option<Rc<RefCell<T>>>,
    _cardinality: PhantomData<C>,
}

/// Optional owning edge (0..1).
pub type Maybe<T> = OwnedEdge<T, Optional>;

/// Mandatory owning edge (exactly 1 once the tree is complete).
pub type One<T> = OwnedEdge<T, Required>;

/// Allocates `node` and returns a `One` owning it.
pub fn make<T: Node>(node: impl Into<T>) -> One<T> {
    One::from_node(node)
}

impl<T, C> OwnedEdge<T, C> {
    /// Creates an empty edge.
    pub fn new() -> Self {
        OwnedEdge {
            val: None,
            _cardinality: PhantomData,
        }
    }

    /// Wraps an existing shared handle without allocating.
    pub fn from_rc(rc: Rc<RefCell<T>>) -> Self {
        OwnedEdge {
            val: Some(rc),
            _cardinality: PhantomData,
        }
    }

    /// Returns `true` if the edge holds no node.
    pub fn is_empty(&self) -> bool {
        self.val.is_none()
    }

    /// Number of nodes held: 0 or 1.
    pub fn len(&self) -> usize {
        usize::from(self.val.is_some())
    }

    /// Empties the edge, releasing its strong reference.
    pub fn reset(&mut self) {
        self.val = None;
    }

    /// Returns the underlying shared handle.
    pub fn as_rc(&self) -> Option<&Rc<RefCell<T>>> {
        self.val.as_ref()
    }

    /// Identity of the held node.
    pub fn identity(&self) -> Option<NodeIdentity> {
        self.val.as_ref().map(NodeIdentity::of)
    }

    /// Returns `true` if both edges hold the same node identity. Two empty
    /// edges are not considered to share a node.
    pub fn ptr_eq<C2>(&self, other: &OwnedEdge<T, C2>) -> bool {
        match (&self.val, &other.val) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Reinterprets the edge with another cardinality, keeping the node.
    pub fn into_cardinality<C2>(self) -> OwnedEdge<T, C2> {
        OwnedEdge {
            val: self.val,
            _cardinality: PhantomData,
        }
    }
}

impl<T: Node, C: Cardinality> OwnedEdge<T, C> {
    /// Allocates `node` and returns an edge owning it.
    pub fn from_node(node: impl Into<T>) -> Self {
        Self::from_rc(Rc::new(RefCell::new(node.into())))
    }

    /// The container kind, for diagnostics.
    pub fn kind() -> EdgeKind {
        if C::REQUIRED {
            EdgeKind::One
        } else {
            EdgeKind::Maybe
        }
    }

    /// Points the edge at the node held by `value` (sharing it), or empties
    /// the edge if `value` is empty.
    pub fn set<C2>(&mut self, value: OwnedEdge<T, C2>) {
        self.val = value.val;
    }

    /// Allocates `node` and points the edge at it. Accepts any concrete kind
    /// convertible into the family `T`.
    pub fn set_node(&mut self, node: impl Into<T>) {
        self.val = Some(Rc::new(RefCell::new(node.into())));
    }

    /// Borrows the node.
    ///
    /// Fails with [`AccessError::EmptyReference`] on an empty edge and with
    /// [`AccessError::Borrowed`] if the node is mutably borrowed.
    pub fn get(&self) -> Result<Ref<'_, T>, AccessError> {
        let rc = self.val.as_ref().ok_or_else(empty_reference::<T>)?;
        rc.try_borrow().map_err(|_| borrowed::<T>())
    }

    /// Mutably borrows the node.
    ///
    /// Fails with [`AccessError::EmptyReference`] on an empty edge and with
    /// [`AccessError::Borrowed`] if the node is already borrowed.
    pub fn get_mut(&self) -> Result<RefMut<'_, T>, AccessError> {
        let rc = self.val.as_ref().ok_or_else(empty_reference::<T>)?;
        rc.try_borrow_mut().map_err(|_| borrowed::<T>())
    }

    /// Same-identity downcast to kind `S`.
    ///
    /// Returns a `Maybe` sharing the node when it is an `S`, and an empty
    /// `Maybe` otherwise (including when this edge is empty).
    pub fn as_variant<S>(&self) -> Maybe<T>
    where
        T: Variant<S>,
    {
        match &self.val {
            Some(rc) if Variant::<S>::try_as(&*rc.borrow()).is_some() => {
                Maybe::from_rc(Rc::clone(rc))
            }
            _ => Maybe::new(),
        }
    }

    /// Borrows the node as kind `S`, or `None` if it is empty or another kind.
    pub fn variant<S>(&self) -> Option<Ref<'_, S>>
    where
        T: Variant<S>,
    {
        let node = self.val.as_ref()?.try_borrow().ok()?;
        Ref::filter_map(node, |n| Variant::<S>::try_as(n)).ok()
    }

    /// Mutably borrows the node as kind `S`, or `None` if it is empty or
    /// another kind.
    pub fn variant_mut<S>(&self) -> Option<RefMut<'_, S>>
    where
        T: Variant<S>,
    {
        let node = self.val.as_ref()?.try_borrow_mut().ok()?;
        RefMut::filter_map(node, |n| Variant::<S>::try_as_mut(n)).ok()
    }

    /// Shallow copy: a new node built by the node's own `copy`, or an empty
    /// edge if this one is empty.
    ///
    /// # Panics
    ///
    /// Panics if the node is mutably borrowed.
    pub fn copy(&self) -> Self {
        match &self.val {
            Some(rc) => Self::from_node(rc.borrow().copy()),
            None => Self::new(),
        }
    }

    /// Deep copy: a new node built by the node's own `deep_clone`, or an
    /// empty edge if this one is empty.
    ///
    /// # Panics
    ///
    /// Panics if any node of the subtree is mutably borrowed.
    pub fn deep_clone(&self) -> Self {
        match &self.val {
            Some(rc) => Self::from_node(rc.borrow().deep_clone()),
            None => Self::new(),
        }
    }

    /// Forwards `visitor` to the node, if any.
    ///
    /// # Panics
    ///
    /// Panics if the node is mutably borrowed.
    pub fn visit<V: ?Sized>(&self, visitor: &mut V)
    where
        T: Visitable<V>,
    {
        if let Some(rc) = &self.val {
            rc.borrow().accept(visitor);
        }
    }
}

fn empty_reference<T: Node>() -> AccessError {
    AccessError::EmptyReference {
        type_name: T::TYPE_NAME.to_string(),
    }
}

fn borrowed<T: Node>() -> AccessError {
    AccessError::Borrowed {
        type_name: T::TYPE_NAME.to_string(),
    }
}

fn node_borrowed<T: Node>() -> NotWellFormed {
    NotWellFormed::NodeBorrowed {
        type_name: T::TYPE_NAME.to_string(),
    }
}

impl<T: Node, C: Cardinality> Completable for OwnedEdge<T, C> {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        if let Some(rc) = &self.val {
            map.add_edge(self)?;
            let node = rc.try_borrow().map_err(|_| node_borrowed::<T>())?;
            node.find_reachable(map)?;
        }
        Ok(())
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        match &self.val {
            Some(rc) => {
                let node = rc.try_borrow().map_err(|_| node_borrowed::<T>())?;
                node.check_complete(map)
            }
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

impl<T, C> Default for OwnedEdge<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shares the node: the clone refers to the same identity.
impl<T, C> Clone for OwnedEdge<T, C> {
    fn clone(&self) -> Self {
        OwnedEdge {
            val: self.val.clone(),
            _cardinality: PhantomData,
        }
    }
}

/// Structural equality: both empty, or both filled with equal nodes.
///
/// # Panics
///
/// Panics if a compared node is mutably borrowed.
impl<T: PartialEq, C, C2> PartialEq<OwnedEdge<T, C2>> for OwnedEdge<T, C> {
    fn eq(&self, other: &OwnedEdge<T, C2>) -> bool {
        match (&self.val, &other.val) {
            (Some(a), Some(b)) => *a.borrow() == *b.borrow(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq, C> Eq for OwnedEdge<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for OwnedEdge<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.val {
            Some(rc) => match rc.try_borrow() {
                Ok(node) => f.debug_tuple("Edge").field(&*node).finish(),
                Err(_) => f
                    .debug_tuple("Edge")
                    .field(&format_args!("<borrowed {}>", NodeIdentity::of(rc)))
                    .finish(),
            },
            None => f.write_str("Empty"),
        }
    }
}

impl<T> From<Maybe<T>> for One<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_cardinality()
    }
}

impl<T> From<One<T>> for Maybe<T> {
    fn from(value: One<T>) -> Self {
        value.into_cardinality()
    }
}

impl<T, C> From<Rc<RefCell<T>>> for OwnedEdge<T, C> {
    fn from(rc: Rc<RefCell<T>>) -> Self {
        Self::from_rc(rc)
    }
}
