//! Expression productions: comparisons, primaries, calls and member access.

use quokka_qk_ast::Node;
use quokka_qk_lexer::TokenKind;

use super::Parser;

impl Parser<'_> {
    /// Expressions start at the comparison level. There is no arithmetic
    /// tier; `+` and friends are lexed but have no parse rule.
    pub(super) fn expression(&mut self) -> Node {
        self.comparison()
    }

    fn comparison(&mut self) -> Node {
        let mut left = self.primary();
        loop {
            let op = match self.current.kind {
                TokenKind::EqEq => "==",
                TokenKind::NotEq => "!=",
                TokenKind::Less => "<",
                TokenKind::Greater => ">",
                TokenKind::LessEq => "<=",
                TokenKind::GreaterEq => ">=",
                _ => break,
            };
            let pos = self.pos();
            self.advance();
            let right = self.primary();
            left = Node::binary(op, left, right, pos);
        }
        left
    }

    fn primary(&mut self) -> Node {
        let pos = self.pos();
        match self.current.kind {
            TokenKind::Number => {
                let value = number_value(&self.current.text);
                self.advance();
                Node::number(value, pos)
            }
            TokenKind::String => {
                let value = self.current.text.clone();
                self.advance();
                Node::string(value, pos)
            }
            TokenKind::Identifier => {
                let name = self.current.text.clone();
                self.advance();
                let ident = Node::identifier(name, pos);
                if self.check(TokenKind::LParen) {
                    // A call directly on an identifier ends the production;
                    // no member chain can follow it.
                    self.consume(TokenKind::LParen, "Expected '('");
                    let arguments = self.arguments();
                    self.consume(TokenKind::RParen, "Expected ')' after arguments");
                    return Node::call(ident, arguments, pos);
                }
                self.call_or_member(ident)
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.expression();
                self.consume(TokenKind::RParen, "Expected ')' after expression");
                expr
            }
            _ => {
                // Recorded without advancing; the enclosing statement's
                // semicolon consume moves past the offender.
                self.error("Unexpected token");
                Node::identifier("", pos)
            }
        }
    }

    /// Postfix chain of `.member` and `.member(args)` segments.
    ///
    /// Member access nodes carry the position of the object they apply to,
    /// the member identifier its own token position.
    fn call_or_member(&mut self, object: Node) -> Node {
        let mut object = object;
        while self.eat(TokenKind::Dot) {
            let member_pos = self.pos();
            // The reserved device verb kinds are valid member names and
            // normalize to their lowercase spelling.
            let member_name = match self.current.kind {
                TokenKind::Identifier => self.current.text.clone(),
                TokenKind::Connect => "connect".to_string(),
                TokenKind::Disconnect => "disconnect".to_string(),
                TokenKind::Write => "write".to_string(),
                TokenKind::Read => "read".to_string(),
                TokenKind::Send => "send".to_string(),
                TokenKind::Receive => "receive".to_string(),
                _ => {
                    self.error("Expected member name");
                    return object;
                }
            };
            self.advance();
            let member = Node::identifier(member_name, member_pos);
            let object_pos = object.pos;
            let access = Node::member(object, member, object_pos);
            object = if self.check(TokenKind::LParen) {
                self.consume(TokenKind::LParen, "Expected '('");
                let arguments = self.arguments();
                self.consume(TokenKind::RParen, "Expected ')' after arguments");
                Node::call(access, arguments, object_pos)
            } else {
                access
            };
        }
        object
    }

    /// Comma separated argument list, already inside the parentheses.
    ///
    /// `name = value` pairs are recognized, fully consumed and dropped;
    /// only positional values reach the argument node.
    fn arguments(&mut self) -> Node {
        let pos = self.pos();
        let mut items = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                if self.check(TokenKind::Identifier) && self.peek.kind == TokenKind::Assign {
                    self.advance();
                    self.consume(TokenKind::Assign, "Expected '='");
                    let _named_value = self.primary();
                } else {
                    items.push(self.expression());
                }
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        Node::arguments(items, pos)
    }
}

/// Numeric literal conversion with longest-prefix semantics: conversion
/// stops at the first character that cannot extend a valid number, so
/// `1.2.3` reads as `1.2`.
fn number_value(text: &str) -> f64 {
    if let Ok(value) = text.parse() {
        return value;
    }
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in text.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + c.len_utf8();
    }
    text[..end].parse().unwrap_or(0.0)
}
