//! Debug rendering of a parse tree.
//!
//! One line per node, children indented one space per depth level:
//!
//! ```text
//! [1:0] PROGRAM
//!  [1:0] DECLARATION "s"
//!   [1:0] IDENTIFIER "Sensor"
//!   [1:0] IDENTIFIER "temp1"
//! ```
//!
//! The output is for humans reading driver output and test failures;
//! nothing parses it back.

use super::{Node, NodeKind};

/// Render a tree as an indented multi-line string.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_into(node, 0, &mut out);
    out
}

fn render_into(node: &Node, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push(' ');
    }
    out.push_str(&format!(
        "[{}:{}] {}",
        node.pos.line,
        node.pos.column,
        node.kind_name()
    ));

    match &node.kind {
        NodeKind::Import { path } => out.push_str(&format!(" \"{path}\"")),
        NodeKind::Declaration { name, .. } => out.push_str(&format!(" \"{name}\"")),
        NodeKind::FunctionDef { name, .. } => out.push_str(&format!(" \"{name}\"")),
        NodeKind::Identifier { name } => out.push_str(&format!(" \"{name}\"")),
        NodeKind::String { value } => out.push_str(&format!(" \"{value}\"")),
        NodeKind::Number { value } => out.push_str(&format!(" {value:.2}")),
        NodeKind::BinaryOp { op, .. } => out.push_str(&format!(" op={op}")),
        NodeKind::UnaryOp { op, .. } => out.push_str(&format!(" op={op}")),
        _ => {}
    }
    out.push('\n');

    match &node.kind {
        NodeKind::Program { statements }
        | NodeKind::Block { statements }
        | NodeKind::Arguments { items: statements } => {
            for child in statements {
                render_into(child, depth + 1, out);
            }
        }
        NodeKind::Import { .. }
        | NodeKind::Identifier { .. }
        | NodeKind::Number { .. }
        | NodeKind::String { .. } => {}
        NodeKind::Declaration {
            device_type, alias, ..
        } => {
            render_into(device_type, depth + 1, out);
            render_into(alias, depth + 1, out);
        }
        NodeKind::Assignment { target, value } => {
            render_into(target, depth + 1, out);
            render_into(value, depth + 1, out);
        }
        NodeKind::IfStatement {
            condition,
            then_block,
            else_block,
        } => {
            render_into(condition, depth + 1, out);
            render_into(then_block, depth + 1, out);
            if let Some(block) = else_block {
                render_into(block, depth + 1, out);
            }
        }
        NodeKind::ExpressionStatement { expr } => render_into(expr, depth + 1, out),
        NodeKind::FunctionDef { body, .. } => render_into(body, depth + 1, out),
        NodeKind::BinaryOp { left, right, .. } => {
            render_into(left, depth + 1, out);
            render_into(right, depth + 1, out);
        }
        NodeKind::UnaryOp { operand, .. } => render_into(operand, depth + 1, out),
        NodeKind::Call { callee, arguments } => {
            render_into(callee, depth + 1, out);
            render_into(arguments, depth + 1, out);
        }
        NodeKind::MemberAccess { object, member } => {
            render_into(object, depth + 1, out);
            render_into(member, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Pos;

    #[test]
    fn test_render_declaration() {
        let pos = Pos::new(1, 0);
        let decl = Node::declaration(
            "s",
            Node::identifier("Sensor", pos),
            Node::identifier("temp1", pos),
            pos,
        );
        let tree = Node::program(vec![decl], pos);
        assert_eq!(
            render(&tree),
            "[1:0] PROGRAM\n \
             [1:0] DECLARATION \"s\"\n  \
             [1:0] IDENTIFIER \"Sensor\"\n  \
             [1:0] IDENTIFIER \"temp1\"\n"
        );
    }

    #[test]
    fn test_render_number_two_decimals() {
        let node = Node::number(5.0, Pos::new(2, 3));
        assert_eq!(render(&node), "[2:3] NUMBER 5.00\n");
    }

    #[test]
    fn test_render_operator_operands_visible() {
        let pos = Pos::new(1, 2);
        let tree = Node::binary(
            "==",
            Node::identifier("a", Pos::new(1, 0)),
            Node::number(1.0, Pos::new(1, 5)),
            pos,
        );
        let text = render(&tree);
        assert!(text.starts_with("[1:2] BINARY_OP op===\n"));
        assert!(text.contains(" [1:0] IDENTIFIER \"a\"\n"));
        assert!(text.contains(" [1:5] NUMBER 1.00\n"));
    }

    #[test]
    fn test_render_empty_string_payload() {
        let node = Node::identifier("", Pos::start());
        assert_eq!(render(&node), "[1:0] IDENTIFIER \"\"\n");
    }
}
