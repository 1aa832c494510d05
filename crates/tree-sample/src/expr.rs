//! Expressions: the `Expr` family and its kinds.
//!
//! Three kinds refer to nodes owned elsewhere in the program through links:
//! `ParamRef` to a parameter of the enclosing function, `Call` to a function
//! of the program (possibly the enclosing one), and `LocalRef` to a `Local`
//! statement.

use std::fmt;

use tree_base::{
    Any, Completable, Link, Node, NotWellFormed, One, OptLink, OwnedEdge, PointerMap, Variant,
};

use crate::macros::node_family;
use crate::nodes::{Function, Param};
use crate::statement::{Local, Statement};

/// Integer constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: i64,
}

impl Literal {
    pub fn new(value: i64) -> Self {
        Literal { value }
    }
}

impl Completable for Literal {
    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn check_complete(&self, _map: &PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }
}

impl Node for Literal {
    const TYPE_NAME: &'static str = "Literal";

    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

/// Reads a parameter of the enclosing function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamRef {
    pub param: Link<Param>,
}

impl ParamRef {
    pub fn to<C>(param: &OwnedEdge<Param, C>) -> Self {
        ParamRef {
            param: Link::to(param),
        }
    }
}

impl Completable for ParamRef {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.param.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.param.check_complete(map)
    }
}

impl Node for ParamRef {
    const TYPE_NAME: &'static str = "ParamRef";

    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
        };
        f.write_str(symbol)
    }
}

/// `lhs op rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub op: BinaryOp,
    pub lhs: One<Expr>,
    pub rhs: One<Expr>,
}

impl Binary {
    pub fn new(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Binary {
            op,
            lhs: One::from_node(lhs),
            rhs: One::from_node(rhs),
        }
    }
}

impl Completable for Binary {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.lhs.find_reachable(map)?;
        self.rhs.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.lhs.check_complete(map)?;
        self.rhs.check_complete(map)
    }
}

impl Node for Binary {
    const TYPE_NAME: &'static str = "Binary";

    fn deep_clone(&self) -> Self {
        Binary {
            op: self.op,
            lhs: self.lhs.deep_clone(),
            rhs: self.rhs.deep_clone(),
        }
    }
}

/// Calls a function of the program with arguments.
#[derive(Debug, Clone, Default)]
pub struct Call {
    pub callee: Link<Function>,
    pub args: Any<Expr>,
}

impl Call {
    pub fn to<C>(callee: &OwnedEdge<Function, C>) -> Self {
        Call {
            callee: Link::to(callee),
            args: Any::new(),
        }
    }

    /// Appends an argument.
    pub fn arg(mut self, arg: impl Into<Expr>) -> Self {
        self.args.emplace(arg);
        self
    }

    /// Name of the called function, if the callee link is alive.
    pub fn callee_name(&self) -> Option<String> {
        self.callee.with(|f| f.name.clone()).ok()
    }
}

/// Callees compare by name: a recursive call links back to its enclosing
/// function, and comparing that structurally would not terminate.
impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        self.callee_name() == other.callee_name() && self.args == other.args
    }
}

impl Completable for Call {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.callee.find_reachable(map)?;
        self.args.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.callee.check_complete(map)?;
        self.args.check_complete(map)
    }
}

impl Node for Call {
    const TYPE_NAME: &'static str = "Call";

    fn deep_clone(&self) -> Self {
        Call {
            callee: self.callee.clone(),
            args: self.args.deep_clone(),
        }
    }
}

/// Reads a local, if it has been resolved.
#[derive(Debug, Clone, Default)]
pub struct LocalRef {
    pub local: OptLink<Statement>,
}

impl LocalRef {
    /// A reference that has not been resolved yet.
    pub fn unresolved() -> Self {
        Self::default()
    }

    pub fn to<C>(local: &OwnedEdge<Statement, C>) -> Self {
        LocalRef {
            local: OptLink::to(local),
        }
    }

    /// Name of the referenced local, if the link is alive and targets a
    /// `Local`.
    pub fn local_name(&self) -> Option<String> {
        self.local
            .with(|stmt| Variant::<Local>::try_as(stmt).map(|local| local.name.clone()))
            .ok()
            .flatten()
    }
}

/// Locals compare by name: `let x = x` links a local's initializer back to
/// the local itself.
impl PartialEq for LocalRef {
    fn eq(&self, other: &Self) -> bool {
        self.local.is_empty() == other.local.is_empty()
            && self.local_name() == other.local_name()
    }
}

impl Completable for LocalRef {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.local.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.local.check_complete(map)
    }
}

impl Node for LocalRef {
    const TYPE_NAME: &'static str = "LocalRef";

    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

/// Any expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    ParamRef(ParamRef),
    Binary(Binary),
    Call(Call),
    LocalRef(LocalRef),
}

node_family!(Expr {
    Literal,
    ParamRef,
    Binary,
    Call,
    LocalRef,
});
