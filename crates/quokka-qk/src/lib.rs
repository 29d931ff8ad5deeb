// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Front end for qk, a small language for declaring hardware devices
//! and scripting commands against them.
//!
//! ```text
//! @import "sensors.j";
//!
//! new TempSensor s1 as bench;
//!
//! if (bench.read() == 0) then {
//!     bench.send("reset");
//! };
//! ```
//!
//! The pipeline is source text → tokens → parse tree → structural
//! validation. Nothing is executed or resolved: imports are checked for
//! their `.j` suffix but never opened, and names are never looked up.
//! Syntax and validation problems are accumulated as [`Diagnostic`]
//! values rather than raised, so a single run reports everything it
//! can find.
//!
//! [`check_source`] runs the whole pipeline over a string;
//! [`check_file`] adds the `.qk` extension gate and file reading on
//! top. The stage crates are re-exported for callers that want to run
//! one stage at a time.
//!
//! ```
//! let analysis = quokka_qk::check_source("new Sensor s as temp1;");
//! assert!(analysis.is_clean());
//! ```

pub mod compile;

pub use compile::{
    check_file, check_source, format_diagnostics, Analysis, CheckError, SOURCE_EXTENSION,
};

pub use quokka_qk_ast::{
    render, walk, Diagnostic, Node, NodeKind, Pos, Severity, Stage,
};
pub use quokka_qk_lexer::{Lexer, Token, TokenKind};
pub use quokka_qk_parser::{parse_program, ParseOutcome, Parser};
pub use quokka_qk_validate::{validate, Report, Validator, DEFAULT_LIMIT};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
