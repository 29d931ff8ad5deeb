//! Parse-tree node definitions.
//!
//! The parser produces plain syntactic structure: node kinds, source
//! positions, and owned child sub-trees. There is no type or symbol
//! information anywhere in the tree; the validator checks shape only.
//!
//! Each kind carries exactly the fields it needs. Fixed-arity kinds
//! (BinaryOp, Call, MemberAccess, Declaration) hold named boxed fields;
//! variable-arity kinds (Program, Block, Arguments) hold an ordered
//! `Vec`. A node therefore cannot exist with a missing operand or a
//! half-built child list, and every traversal is a single uniform
//! recursion over the fields of the matched variant.

pub mod print;
pub mod walk;

use serde::{Deserialize, Serialize};

use crate::foundation::Pos;

/// One node of the parse tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Position of the token this node was anchored to.
    pub pos: Pos,
}

/// What a node is, together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root of every parse. Statements in source order.
    Program { statements: Vec<Node> },

    /// `@import "path";`. The path is kept as written, never resolved.
    Import { path: String },

    /// `new Type name as alias;`. `name` is the device-name string;
    /// the children are the type identifier and the alias identifier,
    /// in that order.
    Declaration {
        name: String,
        device_type: Box<Node>,
        alias: Box<Node>,
    },

    /// Reserved for a future `=` statement form; no production emits it.
    Assignment { target: Box<Node>, value: Box<Node> },

    /// `if (cond) then { .. } else { .. };` with children ordered
    /// condition, then-block, optional else-block.
    IfStatement {
        condition: Box<Node>,
        then_block: Box<Node>,
        else_block: Option<Box<Node>>,
    },

    /// `{ .. }` statement sequence.
    Block { statements: Vec<Node> },

    /// An expression in statement position, terminated by `;`.
    ExpressionStatement { expr: Box<Node> },

    /// Reserved for `funct` definitions; no production emits it.
    FunctionDef { name: String, body: Box<Node> },

    Identifier { name: String },

    Number { value: f64 },

    String { value: String },

    /// A comparison such as `a == 1`. `op` is the operator spelling.
    BinaryOp {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Reserved; no production emits it.
    UnaryOp { op: String, operand: Box<Node> },

    /// `callee(args)`. `arguments` is always an `Arguments` node.
    Call {
        callee: Box<Node>,
        arguments: Box<Node>,
    },

    /// `object.member`. `member` is always an `Identifier` node and
    /// carries the member token's own position.
    MemberAccess { object: Box<Node>, member: Box<Node> },

    /// The parenthesized argument list of a call.
    Arguments { items: Vec<Node> },
}

impl Node {
    pub fn new(kind: NodeKind, pos: Pos) -> Self {
        Self { kind, pos }
    }

    pub fn program(statements: Vec<Node>, pos: Pos) -> Self {
        Self::new(NodeKind::Program { statements }, pos)
    }

    pub fn import(path: impl Into<String>, pos: Pos) -> Self {
        Self::new(NodeKind::Import { path: path.into() }, pos)
    }

    pub fn declaration(
        name: impl Into<String>,
        device_type: Node,
        alias: Node,
        pos: Pos,
    ) -> Self {
        Self::new(
            NodeKind::Declaration {
                name: name.into(),
                device_type: Box::new(device_type),
                alias: Box::new(alias),
            },
            pos,
        )
    }

    pub fn if_statement(
        condition: Node,
        then_block: Node,
        else_block: Option<Node>,
        pos: Pos,
    ) -> Self {
        Self::new(
            NodeKind::IfStatement {
                condition: Box::new(condition),
                then_block: Box::new(then_block),
                else_block: else_block.map(Box::new),
            },
            pos,
        )
    }

    pub fn block(statements: Vec<Node>, pos: Pos) -> Self {
        Self::new(NodeKind::Block { statements }, pos)
    }

    pub fn expression_statement(expr: Node, pos: Pos) -> Self {
        Self::new(
            NodeKind::ExpressionStatement {
                expr: Box::new(expr),
            },
            pos,
        )
    }

    pub fn identifier(name: impl Into<String>, pos: Pos) -> Self {
        Self::new(NodeKind::Identifier { name: name.into() }, pos)
    }

    pub fn number(value: f64, pos: Pos) -> Self {
        Self::new(NodeKind::Number { value }, pos)
    }

    pub fn string(value: impl Into<String>, pos: Pos) -> Self {
        Self::new(
            NodeKind::String {
                value: value.into(),
            },
            pos,
        )
    }

    pub fn binary(op: impl Into<String>, left: Node, right: Node, pos: Pos) -> Self {
        Self::new(
            NodeKind::BinaryOp {
                op: op.into(),
                left: Box::new(left),
                right: Box::new(right),
            },
            pos,
        )
    }

    pub fn call(callee: Node, arguments: Node, pos: Pos) -> Self {
        Self::new(
            NodeKind::Call {
                callee: Box::new(callee),
                arguments: Box::new(arguments),
            },
            pos,
        )
    }

    pub fn member(object: Node, member: Node, pos: Pos) -> Self {
        Self::new(
            NodeKind::MemberAccess {
                object: Box::new(object),
                member: Box::new(member),
            },
            pos,
        )
    }

    pub fn arguments(items: Vec<Node>, pos: Pos) -> Self {
        Self::new(NodeKind::Arguments { items }, pos)
    }

    /// Upper-case kind label used by the debug printer.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Program { .. } => "PROGRAM",
            NodeKind::Import { .. } => "IMPORT",
            NodeKind::Declaration { .. } => "DECLARATION",
            NodeKind::Assignment { .. } => "ASSIGNMENT",
            NodeKind::IfStatement { .. } => "IF",
            NodeKind::Block { .. } => "BLOCK",
            NodeKind::ExpressionStatement { .. } => "EXPR_STMT",
            NodeKind::FunctionDef { .. } => "FUNCTION_DEF",
            NodeKind::Identifier { .. } => "IDENTIFIER",
            NodeKind::Number { .. } => "NUMBER",
            NodeKind::String { .. } => "STRING",
            NodeKind::BinaryOp { .. } => "BINARY_OP",
            NodeKind::UnaryOp { .. } => "UNARY_OP",
            NodeKind::Call { .. } => "CALL",
            NodeKind::MemberAccess { .. } => "MEMBER_ACCESS",
            NodeKind::Arguments { .. } => "ARGUMENTS",
        }
    }
}
