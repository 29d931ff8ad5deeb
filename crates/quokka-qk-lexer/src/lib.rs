// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Tokenizer for qk source text.
//!
//! A hand-written state machine over a two-character lookahead cursor.
//! The lexer never fails: whitespace and `//` comments are skipped,
//! anything unrecognized comes back as an [`TokenKind::Unknown`] token,
//! and after the input is exhausted every further call returns
//! [`TokenKind::Eof`]. Deciding whether an odd token is a problem is
//! the parser's job.
//!
//! Positions follow the convention of [`Pos`]: 1-based lines, 0-based
//! columns. A token's column is where it starts; its line is where it
//! ends, which differs only for string literals spanning newlines.

use std::fmt;
use std::str::Chars;

use quokka_qk_ast::Pos;

/// Token classification.
///
/// The device verbs `Connect`, `Disconnect`, `Write`, `Read`, `Send`,
/// `Receive` are reserved kinds: the parser's member-name slot accepts
/// them, but the keyword table does not produce them, so those words
/// tokenize as identifiers and work both as call targets and as
/// members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    New,
    If,
    Then,
    Else,
    Try,
    Except,
    Finally,
    And,
    Or,
    Not,
    UsbIn,
    UsbOut,
    As,
    Funct,
    Import,

    // Reserved device-verb kinds, never produced by the keyword table
    Connect,
    Disconnect,
    Write,
    Read,
    Send,
    Receive,

    Identifier,
    Number,
    String,

    // Operators and punctuation
    At,
    Assign,
    EqEq,
    NotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Colon,
    Semicolon,

    Eof,
    Unknown,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::New
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::Try
                | TokenKind::Except
                | TokenKind::Finally
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::UsbIn
                | TokenKind::UsbOut
                | TokenKind::As
                | TokenKind::Funct
                | TokenKind::Import
                | TokenKind::Connect
                | TokenKind::Disconnect
                | TokenKind::Write
                | TokenKind::Read
                | TokenKind::Send
                | TokenKind::Receive
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::New => "new",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Try => "try",
            TokenKind::Except => "except",
            TokenKind::Finally => "finally",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::UsbIn => "usbin",
            TokenKind::UsbOut => "usbout",
            TokenKind::As => "as",
            TokenKind::Funct => "funct",
            TokenKind::Import => "import",
            TokenKind::Connect => "connect",
            TokenKind::Disconnect => "disconnect",
            TokenKind::Write => "write",
            TokenKind::Read => "read",
            TokenKind::Send => "send",
            TokenKind::Receive => "receive",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::At => "@",
            TokenKind::Assign => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEq => "<=",
            TokenKind::GreaterEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Eof => "end of input",
            TokenKind::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// Keyword spellings, matched case-insensitively against identifier runs.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("new", TokenKind::New),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("try", TokenKind::Try),
    ("except", TokenKind::Except),
    ("finally", TokenKind::Finally),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
    ("usbin", TokenKind::UsbIn),
    ("usbout", TokenKind::UsbOut),
    ("as", TokenKind::As),
    ("funct", TokenKind::Funct),
    ("import", TokenKind::Import),
];

/// Look up the keyword kind for an identifier run, case-insensitively.
pub fn keyword_kind(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(text))
        .map(|(_, kind)| *kind)
}

/// One lexical unit with its source text and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text: the identifier/number spelling, the unescaped
    /// string body, the operator spelling, or the single unknown
    /// character. Empty for `Eof`.
    pub text: String,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Pos) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

/// Two-character lookahead over source text with position bookkeeping.
///
/// Consuming a newline increments the line and resets the column to 0;
/// consuming any other character increments the column; advancing at
/// end of input changes nothing.
struct Cursor<'src> {
    chars: Chars<'src>,
    current: Option<char>,
    next: Option<char>,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    fn new(source: &'src str) -> Self {
        let mut chars = source.chars();
        let current = chars.next();
        let next = chars.next();
        Self {
            chars,
            current,
            next,
            line: 1,
            column: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.current
    }

    fn peek(&self) -> Option<char> {
        self.next
    }

    fn advance(&mut self) {
        match self.current {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        self.current = self.next;
        self.next = self.chars.next();
    }

    fn pos(&self) -> Pos {
        Pos::new(self.line, self.column)
    }
}

/// The tokenizer. Produces one [`Token`] per [`next_token`] call.
///
/// [`next_token`]: Lexer::next_token
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start_column = self.cursor.column;
        match self.cursor.current() {
            None => Token::new(TokenKind::Eof, "", self.cursor.pos()),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                self.identifier_or_keyword(start_column)
            }
            Some(c) if c.is_ascii_digit() => self.number(start_column),
            Some('"') => self.string(start_column),
            Some(c) => self.operator(c, start_column),
        }
    }

    /// A token's line is read at emission, its column at its start.
    fn token_at(&self, kind: TokenKind, text: String, start_column: u32) -> Token {
        Token::new(kind, text, Pos::new(self.cursor.line, start_column))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                Some(c) if c.is_whitespace() => self.cursor.advance(),
                Some('/') if self.cursor.peek() == Some('/') => {
                    // Comment runs to end of line; the newline itself is
                    // left for the whitespace arm so line accounting
                    // stays in one place.
                    while let Some(c) = self.cursor.current() {
                        if c == '\n' {
                            break;
                        }
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn identifier_or_keyword(&mut self, start_column: u32) -> Token {
        let mut text = String::new();
        while let Some(c) = self.cursor.current() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }

        match keyword_kind(&text) {
            Some(kind) => self.token_at(kind, text, start_column),
            None => self.token_at(TokenKind::Identifier, text, start_column),
        }
    }

    /// Maximal run of digits and dots, kept as raw text. `1.2.3` is one
    /// Number token; conversion happens in the parser.
    fn number(&mut self, start_column: u32) -> Token {
        let mut text = String::new();
        while let Some(c) = self.cursor.current() {
            if c.is_ascii_digit() || c == '.' {
                text.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.token_at(TokenKind::Number, text, start_column)
    }

    /// Everything up to the next unescaped `"` or end of input. A
    /// backslash copies the following character literally; there is no
    /// escape interpretation and no unterminated-string error.
    fn string(&mut self, start_column: u32) -> Token {
        self.cursor.advance(); // opening quote
        let mut text = String::new();
        while let Some(c) = self.cursor.current() {
            if c == '"' {
                break;
            }
            if c == '\\' {
                self.cursor.advance();
                match self.cursor.current() {
                    Some(escaped) => {
                        text.push(escaped);
                        self.cursor.advance();
                    }
                    None => break,
                }
            } else {
                text.push(c);
                self.cursor.advance();
            }
        }
        self.cursor.advance(); // closing quote, no-op at end of input
        self.token_at(TokenKind::String, text, start_column)
    }

    fn operator(&mut self, c: char, start_column: u32) -> Token {
        let two_char = match (c, self.cursor.peek()) {
            ('=', Some('=')) => Some(TokenKind::EqEq),
            ('!', Some('=')) => Some(TokenKind::NotEq),
            ('<', Some('=')) => Some(TokenKind::LessEq),
            ('>', Some('=')) => Some(TokenKind::GreaterEq),
            _ => None,
        };
        if let Some(kind) = two_char {
            self.cursor.advance();
            self.cursor.advance();
            return self.token_at(kind, format!("{c}="), start_column);
        }

        let kind = match c {
            '@' => TokenKind::At,
            '=' => TokenKind::Assign,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            _ => TokenKind::Unknown,
        };
        self.cursor.advance();
        self.token_at(kind, c.to_string(), start_column)
    }
}
