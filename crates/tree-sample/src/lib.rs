//! A small expression language built on `tree-base`.
//!
//! The node types here are written the way a tree generator would emit them:
//! every field that refers to another node is one of the six edge
//! containers, and families of node kinds are closed enums wired up by
//! `node_family!`.
//!
//! ```text
//! Program
//! └── functions: Many<Function>
//!     ├── params: Any<Param>
//!     └── body: One<Block>
//!         └── statements: Any<Statement>   Local | Eval | Return
//!             └── One<Expr> / Maybe<Expr>  Literal | ParamRef | Binary | Call | LocalRef
//! ```
//!
//! `ParamRef`, `Call` and `LocalRef` hold links back into the program.

mod macros;

pub mod expr;
pub mod nodes;
pub mod statement;
pub mod visitor;

pub use expr::{Binary, BinaryOp, Call, Expr, Literal, LocalRef, ParamRef};
pub use nodes::{Block, Function, Param, Program};
pub use statement::{Eval, Local, Return, Statement};
pub use visitor::{NodeCounter, Visitor};
