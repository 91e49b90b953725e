//! Abstract Syntax Tree (AST) types for T-SQL scripts.
//!
//! Every syntactic category is a closed sum: [`Statement`],
//! [`QueryExpression`], [`ScalarExpression`], [`BooleanExpression`],
//! [`TableReference`], [`DataTypeReference`] and each option family. Node
//! structs serialize with a `$type` tag; sums serialize as the inhabited
//! variant. Child fields are declared in source order, which is the order
//! traversal visits them.

#[macro_use]
mod macros;

mod column;
mod database;
mod ddl;
mod dml;
mod expression;
mod identifier;
mod literal;
mod options;
mod predicate;
mod procedural;
mod query;
mod security;
mod server;
mod statement;
mod table;
mod types;

pub use column::*;
pub use database::*;
pub use ddl::*;
pub use dml::*;
pub use expression::*;
pub use identifier::*;
pub use literal::*;
pub use options::*;
pub use predicate::*;
pub use procedural::*;
pub use query::*;
pub use security::*;
pub use server::*;
pub use statement::*;
pub use table::*;
pub use types::*;
