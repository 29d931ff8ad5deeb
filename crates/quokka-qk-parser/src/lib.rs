// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Recursive descent parser for qk source text.
//!
//! The parser consumes tokens from [`quokka_qk_lexer::Lexer`] one at a time
//! with a single token of lookahead and builds the [`quokka_qk_ast::Node`]
//! tree. It never fails outright: every syntax error is recorded as a
//! [`quokka_qk_ast::Diagnostic`] and parsing continues, so callers always
//! get back a tree plus the list of everything that went wrong.
//!
//! The entry point is [`parse_program`]:
//!
//! ```
//! let outcome = quokka_qk_parser::parse_program("new Sensor s as temp1;");
//! assert!(outcome.diagnostics.is_empty());
//! ```

pub mod parser;

pub use parser::{parse_program, ParseOutcome, Parser};
