//! Owning lists: [`Any`] (0..N) and [`Many`] (1..N).
//!
//! A [`Sequence`] stores its elements as `One<T>` edges in insertion order.
//! Empty values are never stored by [`Sequence::add`]; an element can only
//! become empty if a caller resets it through [`Sequence::at_mut`], and the
//! completeness pass reports that like any other empty `One`.
//!
//! [`Sequence::extend`] appends the other list's handles, not copies: the
//! two lists share those nodes afterwards, and mutations through either are
//! visible through both. Attaching both lists to one tree makes it fail the
//! duplicate check.

use std::fmt;
use std::ops::Index;
use std::slice;

use crate::edge::{Cardinality, Optional, Required};
use crate::error::{AccessError, NotWellFormed};
use crate::node::{Completable, Node, Visitable};
use crate::owned::{Maybe, One, OwnedEdge};
use crate::pointer_map::PointerMap;

/// Ordered owning list of nodes of family `T`.
pub struct Sequence<T, C> {
    vec: Vec<One<T>>,
    _cardinality: std::marker::PhantomData<C>,
}

/// Ordered list that may be empty (0..N).
pub type Any<T> = Sequence<T, Optional>;

/// Ordered list that must hold at least one element once the tree is
/// complete (1..N).
pub type Many<T> = Sequence<T, Required>;

impl<T, C> Sequence<T, C> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Sequence {
            vec: Vec::new(),
            _cardinality: std::marker::PhantomData,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Removes all elements.
    pub fn reset(&mut self) {
        self.vec.clear();
    }

    /// Appends the node held by `value`, sharing it. No-op if `value` is
    /// empty.
    pub fn add<C2>(&mut self, value: OwnedEdge<T, C2>) {
        if !value.is_empty() {
            self.vec.push(value.into_cardinality());
        }
    }

    /// Inserts the node held by `value` before position `pos`. A `pos` past
    /// the end appends. No-op if `value` is empty.
    pub fn add_at<C2>(&mut self, value: OwnedEdge<T, C2>, pos: usize) {
        if value.is_empty() {
            return;
        }
        if pos >= self.vec.len() {
            self.vec.push(value.into_cardinality());
        } else {
            self.vec.insert(pos, value.into_cardinality());
        }
    }

    /// Appends every element of `other`, sharing the nodes.
    pub fn extend<C2>(&mut self, other: &Sequence<T, C2>) {
        self.vec.extend(other.vec.iter().cloned());
    }

    /// Removes and returns the last element. No-op on an empty list.
    pub fn remove(&mut self) -> Option<One<T>> {
        self.vec.pop()
    }

    /// Removes and returns the element at `pos`. A `pos` past the end
    /// removes the last element. No-op on an empty list.
    pub fn remove_at(&mut self, pos: usize) -> Option<One<T>> {
        if self.vec.is_empty() {
            return None;
        }
        let pos = pos.min(self.vec.len() - 1);
        Some(self.vec.remove(pos))
    }

    /// Returns a handle sharing the last element, or an empty `Maybe`.
    pub fn back(&self) -> Maybe<T> {
        self.vec
            .last()
            .map(|last| last.clone().into_cardinality())
            .unwrap_or_default()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> slice::Iter<'_, One<T>> {
        self.vec.iter()
    }

    /// Reinterprets the list with another cardinality, keeping the elements.
    pub fn into_cardinality<C2>(self) -> Sequence<T, C2> {
        Sequence {
            vec: self.vec,
            _cardinality: std::marker::PhantomData,
        }
    }
}

impl<T: Node, C: Cardinality> Sequence<T, C> {
    /// Allocates `node` and appends it.
    pub fn emplace(&mut self, node: impl Into<T>) -> &mut Self {
        self.vec.push(One::from_node(node));
        self
    }

    /// Returns the element at `index`.
    ///
    /// Fails with [`AccessError::OutOfRange`] past the end.
    pub fn at(&self, index: usize) -> Result<&One<T>, AccessError> {
        let len = self.vec.len();
        self.vec.get(index).ok_or_else(|| out_of_range::<T>(index, len))
    }

    /// Returns the element edge at `index` mutably.
    ///
    /// Fails with [`AccessError::OutOfRange`] past the end.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut One<T>, AccessError> {
        let len = self.vec.len();
        self.vec
            .get_mut(index)
            .ok_or_else(|| out_of_range::<T>(index, len))
    }

    /// Shallow copy of every element, in order.
    pub fn copy(&self) -> Self {
        self.vec.iter().map(One::copy).collect()
    }

    /// Deep copy of every element, in order.
    pub fn deep_clone(&self) -> Self {
        self.vec.iter().map(One::deep_clone).collect()
    }

    /// Forwards `visitor` to every present element, in order.
    pub fn visit<V: ?Sized>(&self, visitor: &mut V)
    where
        T: Visitable<V>,
    {
        for element in &self.vec {
            element.visit(visitor);
        }
    }
}

fn out_of_range<T: Node>(index: usize, len: usize) -> AccessError {
    AccessError::OutOfRange {
        type_name: T::TYPE_NAME.to_string(),
        index,
        len,
    }
}

impl<T: Node, C: Cardinality> Completable for Sequence<T, C> {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        for element in &self.vec {
            element.find_reachable(map)?;
        }
        Ok(())
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        if C::REQUIRED && self.vec.is_empty() {
            return Err(NotWellFormed::RequiredListEmpty {
                type_name: T::TYPE_NAME.to_string(),
            });
        }
        for element in &self.vec {
            element.check_complete(map)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T, C> Default for Sequence<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shares every element with the original list.
impl<T, C> Clone for Sequence<T, C> {
    fn clone(&self) -> Self {
        Sequence {
            vec: self.vec.clone(),
            _cardinality: std::marker::PhantomData,
        }
    }
}

/// Same length and pairwise structural equality, in order.
impl<T: PartialEq, C, C2> PartialEq<Sequence<T, C2>> for Sequence<T, C> {
    fn eq(&self, other: &Sequence<T, C2>) -> bool {
        self.vec.len() == other.vec.len()
            && self.vec.iter().zip(&other.vec).all(|(a, b)| a == b)
    }
}

impl<T: Eq, C> Eq for Sequence<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for Sequence<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.vec).finish()
    }
}

/// Bounds-checked like [`Sequence::at`], but panics instead of returning an
/// error.
impl<T, C> Index<usize> for Sequence<T, C> {
    type Output = One<T>;

    fn index(&self, index: usize) -> &One<T> {
        &self.vec[index]
    }
}

impl<'a, T, C> IntoIterator for &'a Sequence<T, C> {
    type Item = &'a One<T>;
    type IntoIter = slice::Iter<'a, One<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

/// Collects element edges, skipping empty ones like [`Sequence::add`].
impl<T, C, C2> FromIterator<OwnedEdge<T, C2>> for Sequence<T, C> {
    fn from_iter<I: IntoIterator<Item = OwnedEdge<T, C2>>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        for edge in iter {
            seq.add(edge);
        }
        seq
    }
}
