// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Structural validation of qk parse trees.
//!
//! The validator walks the tree once in pre-order and checks shape only:
//! import paths and device names. It never loads imports, never resolves
//! names, and never mutates the tree. Arity needs no checking here
//! because fixed-arity node kinds carry non-optional fields; a call
//! without a callee or an operator without operands cannot be built.
//!
//! Results come back as a [`Report`]: diagnostics in traversal order
//! plus error and warning counters. The report stores at most
//! [`DEFAULT_LIMIT`] diagnostics (configurable via
//! [`Validator::with_limit`]); the counters keep running past the limit
//! and the overflow is visible through [`Report::dropped`].

use serde::{Deserialize, Serialize};

use quokka_qk_ast::{walk, Diagnostic, Node, NodeKind};

/// Default diagnostic storage capacity of a [`Report`].
pub const DEFAULT_LIMIT: usize = 1024;

/// Structural checker for a parse tree.
#[derive(Debug, Clone)]
pub struct Validator {
    limit: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    /// A validator whose reports store at most `limit` diagnostics.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Check the whole tree, applying each node's rule before its
    /// children.
    pub fn validate(&self, root: &Node) -> Report {
        let mut report = Report::new(self.limit);
        walk(root, &mut |node| check_node(node, &mut report));
        report
    }
}

/// Validate with the default storage limit.
pub fn validate(root: &Node) -> Report {
    Validator::new().validate(root)
}

fn check_node(node: &Node, report: &mut Report) {
    match &node.kind {
        NodeKind::Import { path } => {
            // An empty path gets the empty-path diagnostic and nothing
            // else; the suffix rule applies only to non-empty paths.
            if path.is_empty() {
                report.record(Diagnostic::validation_error(
                    node.pos,
                    "Import path cannot be empty",
                ));
            } else if !path.ends_with(".j") {
                report.record(Diagnostic::validation_error(
                    node.pos,
                    "Import path must reference a .j header/packet definition file",
                ));
            }
        }
        NodeKind::Declaration { name, .. } => {
            if name.is_empty() {
                report.record(Diagnostic::validation_error(
                    node.pos,
                    "Device name cannot be empty",
                ));
            }
        }
        _ => {}
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    dropped: usize,
    limit: usize,
}

impl Report {
    fn new(limit: usize) -> Self {
        Self {
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
            dropped: 0,
            limit,
        }
    }

    /// Count the diagnostic, storing it if the limit allows.
    fn record(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        } else {
            self.warning_count += 1;
        }
        if self.diagnostics.len() < self.limit {
            self.diagnostics.push(diagnostic);
        } else {
            self.dropped += 1;
        }
    }

    /// Stored diagnostics in traversal order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Total errors counted, stored or not.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Total warnings counted, stored or not.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Diagnostics that were counted but not stored.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    /// Validation passes when no rule reported an error.
    pub fn passed(&self) -> bool {
        self.error_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quokka_qk_ast::Pos;

    fn program(statements: Vec<Node>) -> Node {
        Node::program(statements, Pos::start())
    }

    fn import(path: &str, pos: Pos) -> Node {
        Node::import(path, pos)
    }

    fn declaration(name: &str) -> Node {
        let pos = Pos::start();
        Node::declaration(
            name,
            Node::identifier("Sensor", pos),
            Node::identifier("alias1", pos),
            pos,
        )
    }

    #[test]
    fn test_clean_tree_passes() {
        let tree = program(vec![import("dev.j", Pos::start()), declaration("s")]);
        let report = validate(&tree);
        assert!(report.passed());
        assert!(report.diagnostics().is_empty());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_empty_import_path_reports_exactly_once() {
        // The empty path must not also trip the suffix rule.
        let tree = program(vec![import("", Pos::new(1, 0))]);
        let report = validate(&tree);
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.diagnostics()[0].message,
            "Import path cannot be empty"
        );
    }

    #[test]
    fn test_import_path_must_end_in_j() {
        let tree = program(vec![import("devices.txt", Pos::new(2, 0))]);
        let report = validate(&tree);
        assert_eq!(report.error_count(), 1);
        let diagnostic = &report.diagnostics()[0];
        assert_eq!(
            diagnostic.message,
            "Import path must reference a .j header/packet definition file"
        );
        assert_eq!(diagnostic.pos, Pos::new(2, 0));
    }

    #[test]
    fn test_import_suffix_check_is_case_sensitive() {
        let tree = program(vec![import("devices.J", Pos::start())]);
        let report = validate(&tree);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_valid_import_suffix() {
        let tree = program(vec![import("usb/hid.j", Pos::start())]);
        assert!(validate(&tree).passed());
    }

    #[test]
    fn test_empty_device_name() {
        let tree = program(vec![declaration("")]);
        let report = validate(&tree);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.diagnostics()[0].message, "Device name cannot be empty");
    }

    #[test]
    fn test_rules_apply_inside_nested_blocks() {
        let pos = Pos::new(3, 4);
        let inner = Node::block(vec![import("bad.txt", pos)], Pos::new(2, 0));
        let tree = program(vec![Node::if_statement(
            Node::identifier("a", Pos::start()),
            inner,
            None,
            Pos::start(),
        )]);
        let report = validate(&tree);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.diagnostics()[0].pos, pos);
    }

    #[test]
    fn test_diagnostics_in_traversal_order() {
        let tree = program(vec![
            import("", Pos::new(1, 0)),
            declaration(""),
            import("x.png", Pos::new(3, 0)),
        ]);
        let report = validate(&tree);
        assert_eq!(report.error_count(), 3);
        let messages: Vec<_> = report
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Import path cannot be empty",
                "Device name cannot be empty",
                "Import path must reference a .j header/packet definition file",
            ]
        );
    }

    #[test]
    fn test_limit_keeps_counting_and_tracks_dropped() {
        let statements: Vec<Node> = (0..5)
            .map(|i| import("", Pos::new(1, i)))
            .collect();
        let tree = program(statements);
        let report = Validator::with_limit(2).validate(&tree);
        assert_eq!(report.error_count(), 5);
        assert_eq!(report.diagnostics().len(), 2);
        assert_eq!(report.dropped(), 3);
        assert!(report.is_truncated());
        assert!(!report.passed());
    }

    #[test]
    fn test_default_limit_not_truncated() {
        let tree = program(vec![import("", Pos::start())]);
        let report = validate(&tree);
        assert!(!report.is_truncated());
        assert_eq!(report.dropped(), 0);
    }

    #[test]
    fn test_warnings_do_not_fail_validation() {
        let mut report = Report::new(DEFAULT_LIMIT);
        report.record(Diagnostic::validation_warning(Pos::start(), "odd shape"));
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.error_count(), 0);
        assert!(report.passed());
    }

    #[test]
    fn test_validator_is_reusable() {
        let validator = Validator::new();
        let bad = program(vec![import("", Pos::start())]);
        let good = program(vec![import("ok.j", Pos::start())]);
        assert!(!validator.validate(&bad).passed());
        assert!(validator.validate(&good).passed());
    }
}
