// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Tree model for the Quokka qk front end.
//!
//! This crate contains the node definitions the parser produces, the
//! source-position type shared by tokens, nodes, and diagnostics, and
//! the diagnostic record itself. It has no view of concrete syntax;
//! the lexer and parser crates depend on it, never the other way
//! around.

pub mod ast;
pub mod error;
pub mod foundation;

pub use ast::print::render;
pub use ast::walk::walk;
pub use ast::{Node, NodeKind};
pub use error::{Diagnostic, Severity, Stage};
pub use foundation::Pos;
