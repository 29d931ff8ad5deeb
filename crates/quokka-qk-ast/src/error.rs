//! Diagnostic records shared by the parser and the validator.
//!
//! Malformed input never raises through the pipeline; both stages
//! accumulate `Diagnostic` values and keep going. The `Display` output
//! of a diagnostic is the observable contract for tooling built on top
//! of this front end:
//!
//! ```text
//! [<line>:<column>] Parse error: <message>
//! [<line>:<column>] Validation error: <message>
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::foundation::Pos;

/// Which pipeline stage recorded a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Parse,
    Validation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Parse => write!(f, "Parse"),
            Stage::Validation => write!(f, "Validation"),
        }
    }
}

/// Diagnostic severity. Current rules only ever emit `Error`; the
/// warning level is carried through the report counters for forward
/// compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A recorded problem at a source position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub stage: Stage,
    pub severity: Severity,
    pub pos: Pos,
    pub message: String,
}

impl Diagnostic {
    /// Create a syntax error diagnostic.
    pub fn parse_error(pos: Pos, message: impl Into<String>) -> Self {
        Self {
            stage: Stage::Parse,
            severity: Severity::Error,
            pos,
            message: message.into(),
        }
    }

    /// Create a structural validation error diagnostic.
    pub fn validation_error(pos: Pos, message: impl Into<String>) -> Self {
        Self {
            stage: Stage::Validation,
            severity: Severity::Error,
            pos,
            message: message.into(),
        }
    }

    /// Create a validation warning diagnostic.
    pub fn validation_warning(pos: Pos, message: impl Into<String>) -> Self {
        Self {
            stage: Stage::Validation,
            severity: Severity::Warning,
            pos,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {} {}: {}",
            self.pos.line, self.pos.column, self.stage, self.severity, self.message
        )
    }
}
