//! Token model and lexer.

use std::rc::Rc;

use crate::error_parsing::LexError;
use crate::position::{Position, Span};

/// A reserved word. Distinguished from `TokenKind::Identifier` once the lexeme is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Var,
    And,
    Or,
    Not,
    If,
    Then,
    Elif,
    Else,
    End,
    For,
    To,
    Step,
    While,
    Do,
    Func,
    Return,
    Continue,
    Break,
}

impl Keyword {
    fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "var" => Self::Var,
            "and" => Self::And,
            "or" => Self::Or,
            "not" => Self::Not,
            "if" => Self::If,
            "then" => Self::Then,
            "elif" => Self::Elif,
            "else" => Self::Else,
            "end" => Self::End,
            "for" => Self::For,
            "to" => Self::To,
            "step" => Self::Step,
            "while" => Self::While,
            "do" => Self::Do,
            "func" => Self::Func,
            "return" => Self::Return,
            "continue" => Self::Continue,
            "break" => Self::Break,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    Str(String),
    Identifier(String),
    Keyword(Keyword),

    Plus,
    Minus,
    Mul,
    Div,
    Pow,

    Eq,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    LParen,
    RParen,
    LSquare,
    RSquare,
    Comma,
    Arrow,

    Newline,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Turns source text into an ordered token stream terminated by `Eof`.
///
/// One character of lookahead beyond the current character is used for the two-character
/// operators (`==`, `!=`, `<=`, `>=`, `->`).
pub struct Lexer<'a> {
    file_name: Rc<str>,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    pos: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(file_name: &str, source: &'a str) -> Self {
        Self {
            file_name: Rc::from(file_name),
            chars: source.chars().peekable(),
            pos: Position::START,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.pos.advance(ch);
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn span_from(&self, start: Position) -> Span {
        Span::new(self.file_name.clone(), start, self.pos)
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let is_eof = matches!(tok.kind, TokenKind::Eof);
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let start = self.pos;
            let ch = match self.peek() {
                None => return Ok(Token::new(TokenKind::Eof, self.span_from(start))),
                Some(ch) => ch,
            };

            match ch {
                ' ' | '\t' | '\r' => {
                    self.advance();
                    continue;
                }
                '#' => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                    continue;
                }
                '\n' | ';' => {
                    self.advance();
                    return Ok(Token::new(TokenKind::Newline, self.span_from(start)));
                }
                '0'..='9' => return self.lex_number(start),
                '"' => return self.lex_string(start),
                c if c == '_' || c.is_alphabetic() => return Ok(self.lex_identifier(start)),
                _ => return self.lex_operator(start),
            }
        }
    }

    fn lex_number(&mut self, start: Position) -> Result<Token, LexError> {
        let mut text = String::new();
        let mut dot_count = 0;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.advance();
            } else if c == '.' {
                dot_count += 1;
                if dot_count > 1 {
                    self.advance();
                    return Err(LexError::malformed_number(self.span_from(start)));
                }
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let span = self.span_from(start);
        if dot_count == 0 {
            let value: i64 = text
                .parse()
                .map_err(|_| LexError::malformed_number(span.clone()))?;
            Ok(Token::new(TokenKind::Int(value), span))
        } else {
            let value: f64 = text
                .parse()
                .map_err(|_| LexError::malformed_number(span.clone()))?;
            Ok(Token::new(TokenKind::Float(value), span))
        }
    }

    fn lex_string(&mut self, start: Position) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut text = String::new();
        loop {
            match self.advance() {
                None | Some('\n') => return Err(LexError::unterminated_string(self.span_from(start))),
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    _ => return Err(LexError::bad_escape(self.span_from(start))),
                },
                Some(c) => text.push(c),
            }
        }
        Ok(Token::new(TokenKind::Str(text), self.span_from(start)))
    }

    fn lex_identifier(&mut self, start: Position) -> Token {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '_' || c.is_alphanumeric() {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let span = self.span_from(start);
        match Keyword::from_str(&text) {
            Some(kw) => Token::new(TokenKind::Keyword(kw), span),
            None => Token::new(TokenKind::Identifier(text), span),
        }
    }

    fn lex_operator(&mut self, start: Position) -> Result<Token, LexError> {
        let ch = self.advance().expect("checked by caller");
        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => {
                if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '*' => TokenKind::Mul,
            '/' => TokenKind::Div,
            '^' => TokenKind::Pow,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LSquare,
            ']' => TokenKind::RSquare,
            ',' => TokenKind::Comma,
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    return Err(LexError::unexpected_char('!', self.span_from(start)));
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            c => return Err(LexError::unexpected_char(c, self.span_from(start))),
        };
        Ok(Token::new(kind, self.span_from(start)))
    }
}
