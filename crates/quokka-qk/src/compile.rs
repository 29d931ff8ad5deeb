//! The source-in, diagnostics-out pipeline.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use quokka_qk_ast::{Diagnostic, Node};
use quokka_qk_parser::parse_program;
use quokka_qk_validate::{Report, Validator};

/// Extension required of source files handed to [`check_file`].
pub const SOURCE_EXTENSION: &str = "qk";

/// Failure before the pipeline could run. Anything after that point is
/// reported through diagnostics, not errors.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("input file must have the .qk extension, got {path}")]
    Extension { path: String },

    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Root of the parse tree, present even for error-riddled input.
    pub program: Node,
    /// Syntax diagnostics in source order.
    pub parse_diagnostics: Vec<Diagnostic>,
    /// Structural validation outcome over the tree.
    pub report: Report,
}

impl Analysis {
    pub fn parse_error_count(&self) -> usize {
        self.parse_diagnostics.len()
    }

    /// No syntax errors and validation passed.
    pub fn is_clean(&self) -> bool {
        self.parse_diagnostics.is_empty() && self.report.passed()
    }

    /// All diagnostics in pipeline order, parse stage first.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.parse_diagnostics
            .iter()
            .chain(self.report.diagnostics().iter())
    }
}

/// Parse and validate one source text.
pub fn check_source(source: &str) -> Analysis {
    let outcome = parse_program(source);
    let report = Validator::new().validate(&outcome.program);
    Analysis {
        program: outcome.program,
        parse_diagnostics: outcome.diagnostics,
        report,
    }
}

/// Renders diagnostics one per line, in the order given.
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Gate on the `.qk` extension, read the file, then run [`check_source`].
pub fn check_file(path: impl AsRef<Path>) -> Result<Analysis, CheckError> {
    let path = path.as_ref();
    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(CheckError::Extension {
            path: path.display().to_string(),
        });
    }
    let source = fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(check_source(&source))
}
