//! Visitor over the sample IR.
//!
//! [`Visitor`] has one method per concrete node kind. Every method defaults
//! to the matching `walk_*` function, which forwards the visitor to the
//! node's owning edges in declaration order. Links are not followed by the
//! default walk: a call may target its own enclosing function, so following
//! links blindly would not terminate. Visitors that want link targets call
//! `visit` on the link themselves.
//!
//! The `Visitable` impls at the bottom of this file do the double dispatch:
//! a container hands the visitor to `accept`, and `accept` picks the method
//! for the concrete kind.

use indexmap::IndexMap;
use tree_base::{Node, Visitable};

use crate::expr::{Binary, Call, Expr, Literal, LocalRef, ParamRef};
use crate::nodes::{Block, Function, Param, Program};
use crate::statement::{Eval, Local, Return, Statement};

pub trait Visitor {
    fn visit_program(&mut self, node: &Program) {
        walk_program(self, node);
    }

    fn visit_function(&mut self, node: &Function) {
        walk_function(self, node);
    }

    fn visit_param(&mut self, _node: &Param) {}

    fn visit_block(&mut self, node: &Block) {
        walk_block(self, node);
    }

    fn visit_local(&mut self, node: &Local) {
        walk_local(self, node);
    }

    fn visit_eval(&mut self, node: &Eval) {
        walk_eval(self, node);
    }

    fn visit_return(&mut self, node: &Return) {
        walk_return(self, node);
    }

    fn visit_literal(&mut self, _node: &Literal) {}

    fn visit_param_ref(&mut self, _node: &ParamRef) {}

    fn visit_binary(&mut self, node: &Binary) {
        walk_binary(self, node);
    }

    fn visit_call(&mut self, node: &Call) {
        walk_call(self, node);
    }

    fn visit_local_ref(&mut self, _node: &LocalRef) {}
}

// ---------------------------------------------------------------------------
// Default walks
// ---------------------------------------------------------------------------

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, node: &Program) {
    node.functions.visit(visitor);
}

pub fn walk_function<V: Visitor + ?Sized>(visitor: &mut V, node: &Function) {
    node.params.visit(visitor);
    node.body.visit(visitor);
}

pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, node: &Block) {
    node.statements.visit(visitor);
}

pub fn walk_local<V: Visitor + ?Sized>(visitor: &mut V, node: &Local) {
    node.init.visit(visitor);
}

pub fn walk_eval<V: Visitor + ?Sized>(visitor: &mut V, node: &Eval) {
    node.expr.visit(visitor);
}

pub fn walk_return<V: Visitor + ?Sized>(visitor: &mut V, node: &Return) {
    node.value.visit(visitor);
}

pub fn walk_binary<V: Visitor + ?Sized>(visitor: &mut V, node: &Binary) {
    node.lhs.visit(visitor);
    node.rhs.visit(visitor);
}

pub fn walk_call<V: Visitor + ?Sized>(visitor: &mut V, node: &Call) {
    node.args.visit(visitor);
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

macro_rules! dispatch {
    ($($kind:ty => $method:ident),+ $(,)?) => {
        $(
            impl<V: Visitor + ?Sized> Visitable<V> for $kind {
                fn accept(&self, visitor: &mut V) {
                    visitor.$method(self);
                }
            }
        )+
    };
}

dispatch! {
    Program => visit_program,
    Function => visit_function,
    Param => visit_param,
    Block => visit_block,
    Local => visit_local,
    Eval => visit_eval,
    Return => visit_return,
    Literal => visit_literal,
    ParamRef => visit_param_ref,
    Binary => visit_binary,
    Call => visit_call,
    LocalRef => visit_local_ref,
}

impl<V: Visitor + ?Sized> Visitable<V> for Statement {
    fn accept(&self, visitor: &mut V) {
        match self {
            Statement::Local(node) => node.accept(visitor),
            Statement::Eval(node) => node.accept(visitor),
            Statement::Return(node) => node.accept(visitor),
        }
    }
}

impl<V: Visitor + ?Sized> Visitable<V> for Expr {
    fn accept(&self, visitor: &mut V) {
        match self {
            Expr::Literal(node) => node.accept(visitor),
            Expr::ParamRef(node) => node.accept(visitor),
            Expr::Binary(node) => node.accept(visitor),
            Expr::Call(node) => node.accept(visitor),
            Expr::LocalRef(node) => node.accept(visitor),
        }
    }
}

// ---------------------------------------------------------------------------
// NodeCounter
// ---------------------------------------------------------------------------

/// Counts visited nodes per kind, in order of first appearance.
#[derive(Debug, Default)]
pub struct NodeCounter {
    counts: IndexMap<&'static str, usize>,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every node reachable from `root` through owning edges,
    /// including `root` itself.
    pub fn count<T: Visitable<Self>>(root: &T) -> Self {
        let mut counter = Self::new();
        root.accept(&mut counter);
        counter
    }

    pub fn get(&self, kind: &str) -> usize {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Kinds with their counts, in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    fn bump<T: Node>(&mut self) {
        *self.counts.entry(T::TYPE_NAME).or_insert(0) += 1;
    }
}

impl Visitor for NodeCounter {
    fn visit_program(&mut self, node: &Program) {
        self.bump::<Program>();
        walk_program(self, node);
    }

    fn visit_function(&mut self, node: &Function) {
        self.bump::<Function>();
        walk_function(self, node);
    }

    fn visit_param(&mut self, _node: &Param) {
        self.bump::<Param>();
    }

    fn visit_block(&mut self, node: &Block) {
        self.bump::<Block>();
        walk_block(self, node);
    }

    fn visit_local(&mut self, node: &Local) {
        self.bump::<Local>();
        walk_local(self, node);
    }

    fn visit_eval(&mut self, node: &Eval) {
        self.bump::<Eval>();
        walk_eval(self, node);
    }

    fn visit_return(&mut self, node: &Return) {
        self.bump::<Return>();
        walk_return(self, node);
    }

    fn visit_literal(&mut self, _node: &Literal) {
        self.bump::<Literal>();
    }

    fn visit_param_ref(&mut self, _node: &ParamRef) {
        self.bump::<ParamRef>();
    }

    fn visit_binary(&mut self, node: &Binary) {
        self.bump::<Binary>();
        walk_binary(self, node);
    }

    fn visit_call(&mut self, node: &Call) {
        self.bump::<Call>();
        walk_call(self, node);
    }

    fn visit_local_ref(&mut self, _node: &LocalRef) {
        self.bump::<LocalRef>();
    }
}
