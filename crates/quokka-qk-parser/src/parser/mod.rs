//! Parser state and statement productions.
//!
//! Error recovery policy: a mismatch in [`Parser::consume`] records a
//! diagnostic at the offending token and then advances anyway. Statement
//! productions therefore always make progress, and a single bad token
//! produces a short cascade of diagnostics rather than an abort.

mod expr;

use quokka_qk_ast::{Diagnostic, Node, Pos};
use quokka_qk_lexer::{Lexer, Token, TokenKind};

/// Everything a parse run produces: the tree and the diagnostics that
/// accumulated while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Root of the parse tree, always a `Program` node.
    pub program: Node,
    /// Syntax errors in source order. Empty on a clean parse.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Parse a complete qk source text into a `Program` tree.
pub fn parse_program(source: &str) -> ParseOutcome {
    Parser::new(source).parse()
}

/// Single-lookahead recursive descent parser.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            diagnostics: Vec::new(),
        }
    }

    /// Run the parser to end of input.
    pub fn parse(mut self) -> ParseOutcome {
        let program = self.program();
        ParseOutcome {
            program,
            diagnostics: self.diagnostics,
        }
    }

    // ---- token plumbing ----

    pub(crate) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Advance past the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require a token of the given kind. On mismatch, record a diagnostic
    /// at the current token. Advances in both cases so the parser cannot
    /// wedge on one bad token.
    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) {
        if !self.check(kind) {
            self.error(message);
        }
        self.advance();
    }

    pub(crate) fn error(&mut self, message: &str) {
        self.diagnostics
            .push(Diagnostic::parse_error(self.current.pos, message));
    }

    pub(crate) fn pos(&self) -> Pos {
        self.current.pos
    }

    // ---- statements ----

    fn program(&mut self) -> Node {
        let pos = self.pos();
        let mut statements = Vec::new();
        while !self.check(TokenKind::Eof) {
            if let Some(statement) = self.statement() {
                statements.push(statement);
            }
        }
        Node::program(statements, pos)
    }

    fn statement(&mut self) -> Option<Node> {
        match self.current.kind {
            TokenKind::At => Some(self.import()),
            TokenKind::New => Some(self.declaration()),
            TokenKind::If => Some(self.if_statement()),
            TokenKind::Eof => None,
            _ => Some(self.expression_statement()),
        }
    }

    /// `@import "path";`
    fn import(&mut self) -> Node {
        let pos = self.pos();
        self.consume(TokenKind::At, "Expected '@'");
        self.consume(TokenKind::Import, "Expected 'import'");
        let path = self.current.text.clone();
        self.consume(TokenKind::String, "Expected string path");
        self.consume(TokenKind::Semicolon, "Expected ';' after import");
        Node::import(path, pos)
    }

    /// `new Type name as alias;`
    ///
    /// The type and alias identifier children both carry the position of
    /// the `new` keyword.
    fn declaration(&mut self) -> Node {
        let pos = self.pos();
        self.consume(TokenKind::New, "Expected 'new'");
        let device_type = self.current.text.clone();
        self.consume(TokenKind::Identifier, "Expected device type");
        let name = self.current.text.clone();
        self.consume(TokenKind::Identifier, "Expected device name");
        self.consume(TokenKind::As, "Expected 'as'");
        let alias = self.current.text.clone();
        self.consume(TokenKind::Identifier, "Expected alias name");
        self.consume(TokenKind::Semicolon, "Expected ';' after declaration");
        Node::declaration(
            name,
            Node::identifier(device_type, pos),
            Node::identifier(alias, pos),
            pos,
        )
    }

    /// `if (condition) then { ... } else { ... };`
    fn if_statement(&mut self) -> Node {
        let pos = self.pos();
        self.consume(TokenKind::If, "Expected 'if'");
        self.consume(TokenKind::LParen, "Expected '(' after 'if'");
        let condition = self.expression();
        self.consume(TokenKind::RParen, "Expected ')' after condition");
        self.consume(TokenKind::Then, "Expected 'then' after condition");
        let then_block = self.block();
        let else_block = if self.eat(TokenKind::Else) {
            Some(self.block())
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expected ';' after if statement");
        Node::if_statement(condition, then_block, else_block, pos)
    }

    fn block(&mut self) -> Node {
        let pos = self.pos();
        self.consume(TokenKind::LBrace, "Expected '{'");
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::Eof) {
            if let Some(statement) = self.statement() {
                statements.push(statement);
            }
        }
        self.consume(TokenKind::RBrace, "Expected '}'");
        Node::block(statements, pos)
    }

    fn expression_statement(&mut self) -> Node {
        let expr = self.expression();
        self.consume(TokenKind::Semicolon, "Expected ';' after expression");
        let pos = expr.pos;
        Node::expression_statement(expr, pos)
    }
}
