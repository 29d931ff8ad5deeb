//! Source location tracking for tokens, nodes, and diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column position in one source text.
///
/// Lines are 1-based. Columns are 0-based and reset to 0 after every
/// newline; the character after a newline is at column 0. Every token,
/// node, and diagnostic in the pipeline uses this convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// 1-based line number
    pub line: u32,
    /// 0-based column number
    pub column: u32,
}

impl Pos {
    /// Create a position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first character of a source text.
    pub fn start() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_start() {
        let pos = Pos::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 0);
    }

    #[test]
    fn test_pos_display() {
        assert_eq!(Pos::new(3, 17).to_string(), "3:17");
        assert_eq!(Pos::start().to_string(), "1:0");
    }

    #[test]
    fn test_pos_equality() {
        assert_eq!(Pos::new(2, 4), Pos::new(2, 4));
        assert_ne!(Pos::new(2, 4), Pos::new(4, 2));
    }
}
