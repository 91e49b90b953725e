//! T-SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! [`Parser`] owns the token cursor and the script driver; the sibling
//! modules add productions to it, grouped by statement area.

mod data_type;
mod database;
mod ddl;
mod ddl_module;
mod ddl_table;
mod dml;
mod error;
mod expr;
mod option_list;
mod options;
mod parser;
mod pratt;
mod procedural;
mod query;
mod security;
mod server;
mod table;

pub use error::{Diagnostic, DiagnosticCode, ParseError, Severity};
pub use options::ParseOptions;
pub use parser::{MAX_NESTING_DEPTH, ParseResult, Parser};
