//! Structural nodes: programs, functions, parameters and blocks.
//!
//! Each node lists its edges in declaration order; both passes of the
//! well-formedness check and the visitor walk fields in that order.

use tracing::{debug, warn};
use tree_base::{Any, Completable, Many, Node, NotWellFormed, One, PointerMap};

use crate::statement::Statement;

/// Root of a program: a named, non-empty list of functions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub name: String,
    pub functions: Many<Function>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Program {
            name: name.into(),
            functions: Many::new(),
        }
    }

    /// Looks up a function by name.
    pub fn function(&self, name: &str) -> Option<&One<Function>> {
        self.functions
            .iter()
            .find(|f| f.get().is_ok_and(|f| f.name == name))
    }

    /// Runs the well-formedness check and logs the outcome.
    pub fn validate(&self) -> Result<(), NotWellFormed> {
        let result = self.check_well_formed();
        match &result {
            Ok(()) => debug!(
                program = %self.name,
                functions = self.functions.len(),
                "program is well formed"
            ),
            Err(err) => warn!(program = %self.name, %err, "program is not well formed"),
        }
        result
    }
}

impl Completable for Program {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.functions.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.functions.check_complete(map)
    }
}

impl Node for Program {
    const TYPE_NAME: &'static str = "Program";

    fn deep_clone(&self) -> Self {
        Program {
            name: self.name.clone(),
            functions: self.functions.deep_clone(),
        }
    }
}

/// A function: parameters and a mandatory body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Function {
    pub name: String,
    pub params: Any<Param>,
    pub body: One<Block>,
}

impl Function {
    /// A function with no parameters and no body yet.
    pub fn new(name: impl Into<String>) -> Self {
        Function {
            name: name.into(),
            params: Any::new(),
            body: One::new(),
        }
    }

    /// Returns the parameter edge with the given name.
    pub fn param(&self, name: &str) -> Option<&One<Param>> {
        self.params
            .iter()
            .find(|p| p.get().is_ok_and(|p| p.name == name))
    }
}

impl Completable for Function {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.params.find_reachable(map)?;
        self.body.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.params.check_complete(map)?;
        self.body.check_complete(map)
    }
}

impl Node for Function {
    const TYPE_NAME: &'static str = "Function";

    fn deep_clone(&self) -> Self {
        Function {
            name: self.name.clone(),
            params: self.params.deep_clone(),
            body: self.body.deep_clone(),
        }
    }
}

/// A named function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Param {
    pub name: String,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Param { name: name.into() }
    }
}

impl Completable for Param {
    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn check_complete(&self, _map: &PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }
}

impl Node for Param {
    const TYPE_NAME: &'static str = "Param";

    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

/// An ordered list of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Any<Statement>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Completable for Block {
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.statements.find_reachable(map)
    }

    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.statements.check_complete(map)
    }
}

impl Node for Block {
    const TYPE_NAME: &'static str = "Block";

    fn deep_clone(&self) -> Self {
        Block {
            statements: self.statements.deep_clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_lookup_by_name() {
        let mut program = Program::new("demo");
        program.functions.emplace(Function::new("main"));
        program.functions.emplace(Function::new("helper"));

        let helper = program.function("helper").unwrap();
        assert_eq!(helper.get().unwrap().name, "helper");
        assert!(program.function("missing").is_none());
    }

    #[test]
    fn param_lookup_by_name() {
        let mut function = Function::new("f");
        function.params.emplace(Param::new("x"));
        assert!(function.param("x").is_some());
        assert!(function.param("y").is_none());
    }

    #[test]
    fn empty_program_is_incomplete() {
        let program = Program::new("demo");
        let err = program.check_well_formed().unwrap_err();
        assert_eq!(err.to_string(), "'Many' edge of type Function is empty");
    }

    #[test]
    fn function_without_body_is_incomplete() {
        let mut program = Program::new("demo");
        program.functions.emplace(Function::new("main"));
        let err = program.check_well_formed().unwrap_err();
        assert_eq!(err.to_string(), "'One' edge of type Block is empty");
    }
}
