//! Tree walking shared by the validator and analysis passes.
//!
//! One `walk` function, pre-order, closure-based. The caller owns
//! whatever state it accumulates; no visitor trait, no context
//! threading. Because every kind stores its children in ordinary owned
//! fields, this single recursion reaches every node exactly once.

use super::{Node, NodeKind};

/// Recursively walk a tree in pre-order, calling `visitor` for each
/// node before descending into its children, left to right.
pub fn walk<V>(node: &Node, visitor: &mut V)
where
    V: FnMut(&Node),
{
    visitor(node);

    match &node.kind {
        NodeKind::Program { statements }
        | NodeKind::Block { statements }
        | NodeKind::Arguments { items: statements } => {
            for child in statements {
                walk(child, visitor);
            }
        }
        NodeKind::Import { .. }
        | NodeKind::Identifier { .. }
        | NodeKind::Number { .. }
        | NodeKind::String { .. } => {}
        NodeKind::Declaration {
            device_type, alias, ..
        } => {
            walk(device_type, visitor);
            walk(alias, visitor);
        }
        NodeKind::Assignment { target, value } => {
            walk(target, visitor);
            walk(value, visitor);
        }
        NodeKind::IfStatement {
            condition,
            then_block,
            else_block,
        } => {
            walk(condition, visitor);
            walk(then_block, visitor);
            if let Some(block) = else_block {
                walk(block, visitor);
            }
        }
        NodeKind::ExpressionStatement { expr } => walk(expr, visitor),
        NodeKind::FunctionDef { body, .. } => walk(body, visitor),
        NodeKind::BinaryOp { left, right, .. } => {
            walk(left, visitor);
            walk(right, visitor);
        }
        NodeKind::UnaryOp { operand, .. } => walk(operand, visitor),
        NodeKind::Call { callee, arguments } => {
            walk(callee, visitor);
            walk(arguments, visitor);
        }
        NodeKind::MemberAccess { object, member } => {
            walk(object, visitor);
            walk(member, visitor);
        }
    }
}
