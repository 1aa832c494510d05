//! Minimal node types for unit tests.

use crate::edge::Cardinality;
use crate::error::NotWellFormed;
use crate::node::{Completable, Node, Variant};
use crate::owned::One;
use crate::pointer_map::PointerMap;
use crate::sequence::Sequence;

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub value: i64,
}

impl Leaf {
    pub fn new(value: i64) -> Self {
        Leaf { value }
    }
}

impl Completable for Leaf {
    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn check_complete(&self, _map: &PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }
}

impl Node for Leaf {
    const TYPE_NAME: &'static str = "Leaf";

    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub left: One<Leaf>,
    pub right: One<Leaf>,
}

impl Pair {
    pub fn new(left: Leaf, right: Leaf) -> Self {
        Pair {
            left: One::from_node(left),
            right: One::from_node(right),
        }
    }
}

impl Completable for Pair {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.left.find_reachable(map)?;
        self.right.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.left.check_complete(map)?;
        self.right.check_complete(map)
    }
}

impl Node for Pair {
    const TYPE_NAME: &'static str = "Pair";

    fn deep_clone(&self) -> Self {
        Pair {
            left: self.left.deep_clone(),
            right: self.right.deep_clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub side: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Leaf(Leaf),
    Square(Square),
}

impl From<Leaf> for Shape {
    fn from(leaf: Leaf) -> Self {
        Shape::Leaf(leaf)
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Shape::Square(square)
    }
}

impl Completable for Shape {
    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn check_complete(&self, _map: &PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }
}

impl Node for Shape {
    const TYPE_NAME: &'static str = "Shape";

    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

impl Variant<Leaf> for Shape {
    fn try_as(&self) -> Option<&Leaf> {
        match self {
            Shape::Leaf(leaf) => Some(leaf),
            Shape::Square(_) => None,
        }
    }

    fn try_as_mut(&mut self) -> Option<&mut Leaf> {
        match self {
            Shape::Leaf(leaf) => Some(leaf),
            Shape::Square(_) => None,
        }
    }
}

impl Variant<Square> for Shape {
    fn try_as(&self) -> Option<&Square> {
        match self {
            Shape::Square(square) => Some(square),
            Shape::Leaf(_) => None,
        }
    }

    fn try_as_mut(&mut self) -> Option<&mut Square> {
        match self {
            Shape::Square(square) => Some(square),
            Shape::Leaf(_) => None,
        }
    }
}

/// Values of a list of leaves, in order.
pub fn values<C: Cardinality>(seq: &Sequence<Leaf, C>) -> Vec<i64> {
    seq.iter().map(|leaf| leaf.get().unwrap().value).collect()
}
