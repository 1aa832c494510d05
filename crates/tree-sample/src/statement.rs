//! Statements: the `Statement` family and its kinds.

use tree_base::{Completable, Maybe, Node, NotWellFormed, One, PointerMap};

use crate::expr::Expr;
use crate::macros::node_family;

/// Binds the value of `init` to `name` for the rest of the block.
#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    pub name: String,
    pub init: One<Expr>,
}

impl Local {
    pub fn new(name: impl Into<String>, init: impl Into<Expr>) -> Self {
        Local {
            name: name.into(),
            init: One::from_node(init),
        }
    }
}

impl Completable for Local {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.init.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.init.check_complete(map)
    }
}

impl Node for Local {
    const TYPE_NAME: &'static str = "Local";

    fn deep_clone(&self) -> Self {
        Local {
            name: self.name.clone(),
            init: self.init.deep_clone(),
        }
    }
}

/// Evaluates an expression for its effects.
#[derive(Debug, Clone, PartialEq)]
pub struct Eval {
    pub expr: One<Expr>,
}

impl Eval {
    pub fn new(expr: impl Into<Expr>) -> Self {
        Eval {
            expr: One::from_node(expr),
        }
    }
}

impl Completable for Eval {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.expr.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.expr.check_complete(map)
    }
}

impl Node for Eval {
    const TYPE_NAME: &'static str = "Eval";

    fn deep_clone(&self) -> Self {
        Eval {
            expr: self.expr.deep_clone(),
        }
    }
}

/// Leaves the function, optionally with a value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Return {
    pub value: Maybe<Expr>,
}

impl Return {
    /// A `return` without a value.
    pub fn unit() -> Self {
        Self::default()
    }

    pub fn new(value: impl Into<Expr>) -> Self {
        Return {
            value: Maybe::from_node(value),
        }
    }
}

impl Completable for Return {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.value.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.value.check_complete(map)
    }
}

impl Node for Return {
    const TYPE_NAME: &'static str = "Return";

    fn deep_clone(&self) -> Self {
        Return {
            value: self.value.deep_clone(),
        }
    }
}

/// Any statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Local(Local),
    Eval(Eval),
    Return(Return),
}

node_family!(Statement { Local, Eval, Return });

#[cfg(test)]
mod tests {
    use tree_base::{make, Variant};

    use super::*;
    use crate::expr::Literal;

    #[test]
    fn kinds_convert_into_family() {
        let stmt: Statement = Return::unit().into();
        assert_eq!(stmt.kind_name(), "Return");
        assert!(Variant::<Return>::try_as(&stmt).is_some());
        assert!(Variant::<Local>::try_as(&stmt).is_none());
    }

    #[test]
    fn unit_return_is_complete() {
        let stmt = make::<Statement>(Return::unit());
        assert!(stmt.is_well_formed());
    }

    #[test]
    fn cleared_local_init_is_incomplete() {
        let stmt = make::<Statement>(Local::new("x", Literal::new(1)));
        stmt.variant_mut::<Local>().unwrap().init.reset();
        let err = stmt.check_well_formed().unwrap_err();
        assert_eq!(err.to_string(), "'One' edge of type Expr is empty");
    }

    #[test]
    fn deep_clone_keeps_kind() {
        let stmt: Statement = Eval::new(Literal::new(4)).into();
        let clone = stmt.deep_clone();
        assert_eq!(clone, stmt);
        assert_eq!(clone.kind_name(), "Eval");
    }
}
