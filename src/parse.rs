//! Recursive-descent parser producing an [`Ast`] from a token stream.

use crate::ast::{Ast, BinOp, BodyForm, IfCase, NodeKind, UnaryOp};
use crate::error_parsing::SyntaxError;
use crate::token::{Keyword, Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

type PResult<T> = Result<T, SyntaxError>;

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse_program(mut self) -> PResult<Ast> {
        self.skip_newlines();
        let mut statements = Vec::new();
        while !self.at_eof() {
            statements.push(self.statement()?);
            if self.at_eof() {
                break;
            }
            if !self.at_newline() {
                return Err(self.expected("newline or end of input"));
            }
            self.skip_newlines();
        }
        let span = if let (Some(first), Some(last)) = (statements.first(), statements.last()) {
            first.span.merge(&last.span)
        } else {
            self.current().span.clone()
        };
        Ok(Ast::new(NodeKind::Program(statements), span))
    }

    // ---- token stream helpers ----

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn at_eof(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn at_newline(&self) -> bool {
        matches!(self.current().kind, TokenKind::Newline)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn skip_newlines(&mut self) {
        while self.at_newline() {
            self.advance();
        }
    }

    fn expected(&self, what: &str) -> SyntaxError {
        SyntaxError::expected(what, &self.current().kind, self.current().span.clone())
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> PResult<Token> {
        if &self.current().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.expected(what))
        }
    }

    fn expect_keyword(&mut self, kw: Keyword, what: &str) -> PResult<Token> {
        self.expect(&TokenKind::Keyword(kw), what)
    }

    fn at_keyword(&self, kw: Keyword) -> bool {
        matches!(&self.current().kind, TokenKind::Keyword(k) if *k == kw)
    }

    fn eat_keyword(&mut self, kw: Keyword) -> bool {
        if self.at_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ---- statements ----

    fn statement(&mut self) -> PResult<Ast> {
        let start_span = self.current().span.clone();
        if self.at_keyword(Keyword::Return) {
            self.advance();
            let expr = if self.at_newline() || self.at_eof() || self.at_keyword(Keyword::End) {
                None
            } else {
                Some(Box::new(self.expr()?))
            };
            let span = match &expr {
                Some(e) => start_span.merge(&e.span),
                None => start_span,
            };
            return Ok(Ast::new(NodeKind::Return(expr), span));
        }
        if self.at_keyword(Keyword::Continue) {
            self.advance();
            return Ok(Ast::new(NodeKind::Continue, start_span));
        }
        if self.at_keyword(Keyword::Break) {
            self.advance();
            return Ok(Ast::new(NodeKind::Break, start_span));
        }
        self.expr()
    }

    /// Parses a block body: `NEWLINE stmt (NEWLINE+ stmt)* NEWLINE+ end`.
    fn block_body(&mut self, closers: &[Keyword]) -> PResult<Ast> {
        let start_span = self.current().span.clone();
        self.skip_newlines();
        let mut statements = Vec::new();
        loop {
            if closers.iter().any(|k| self.at_keyword(*k)) || self.at_eof() {
                break;
            }
            statements.push(self.statement()?);
            if closers.iter().any(|k| self.at_keyword(*k)) {
                break;
            }
            if !self.at_newline() {
                return Err(self.expected("newline"));
            }
            self.skip_newlines();
        }
        let end_span = self.current().span.clone();
        Ok(Ast::new(NodeKind::StatementList(statements), start_span.merge(&end_span)))
    }

    // ---- expressions: precedence ladder ----

    fn expr(&mut self) -> PResult<Ast> {
        if self.at_keyword(Keyword::Var) {
            let start_span = self.advance().span;
            let name = self.identifier_name()?;
            self.expect(&TokenKind::Eq, "'='")?;
            let value = self.expr()?;
            let span = start_span.merge(&value.span);
            return Ok(Ast::new(NodeKind::VarAssign(name, Box::new(value)), span));
        }
        self.or_expr()
    }

    fn identifier_name(&mut self) -> PResult<String> {
        match self.current().kind.clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.expected("identifier")),
        }
    }

    fn or_expr(&mut self) -> PResult<Ast> {
        let mut left = self.and_expr()?;
        while self.at_keyword(Keyword::Or) {
            self.advance();
            let right = self.and_expr()?;
            let span = left.span.merge(&right.span);
            left = Ast::new(NodeKind::BinOp(Box::new(left), BinOp::Or, Box::new(right)), span);
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> PResult<Ast> {
        let mut left = self.not_expr()?;
        while self.at_keyword(Keyword::And) {
            self.advance();
            let right = self.not_expr()?;
            let span = left.span.merge(&right.span);
            left = Ast::new(NodeKind::BinOp(Box::new(left), BinOp::And, Box::new(right)), span);
        }
        Ok(left)
    }

    fn not_expr(&mut self) -> PResult<Ast> {
        if self.at_keyword(Keyword::Not) {
            let start_span = self.advance().span;
            let operand = self.not_expr()?;
            let span = start_span.merge(&operand.span);
            return Ok(Ast::new(NodeKind::UnaryOp(UnaryOp::Not, Box::new(operand)), span));
        }
        self.comparison()
    }

    fn comparison(&mut self) -> PResult<Ast> {
        let mut left = self.additive()?;
        loop {
            let op = match &self.current().kind {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::NotEq,
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::LtEq => BinOp::LtEq,
                TokenKind::GtEq => BinOp::GtEq,
                _ => break,
            };
            self.advance();
            let right = self.additive()?;
            let span = left.span.merge(&right.span);
            left = Ast::new(NodeKind::BinOp(Box::new(left), op, Box::new(right)), span);
        }
        Ok(left)
    }

    fn additive(&mut self) -> PResult<Ast> {
        let mut left = self.multiplicative()?;
        loop {
            let op = match &self.current().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.multiplicative()?;
            let span = left.span.merge(&right.span);
            left = Ast::new(NodeKind::BinOp(Box::new(left), op, Box::new(right)), span);
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> PResult<Ast> {
        let mut left = self.unary_sign()?;
        loop {
            let op = match &self.current().kind {
                TokenKind::Mul => BinOp::Mul,
                TokenKind::Div => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.unary_sign()?;
            let span = left.span.merge(&right.span);
            left = Ast::new(NodeKind::BinOp(Box::new(left), op, Box::new(right)), span);
        }
        Ok(left)
    }

    fn unary_sign(&mut self) -> PResult<Ast> {
        let op = match &self.current().kind {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            _ => None,
        };
        if let Some(op) = op {
            let start_span = self.advance().span;
            let operand = self.unary_sign()?;
            let span = start_span.merge(&operand.span);
            return Ok(Ast::new(NodeKind::UnaryOp(op, Box::new(operand)), span));
        }
        self.power()
    }

    fn power(&mut self) -> PResult<Ast> {
        let base = self.call()?;
        if matches!(self.current().kind, TokenKind::Pow) {
            self.advance();
            // right-associative: recurse into unary_sign, not power, since `2^-3` should parse
            let exponent = self.unary_sign()?;
            let span = base.span.merge(&exponent.span);
            return Ok(Ast::new(NodeKind::BinOp(Box::new(base), BinOp::Pow, Box::new(exponent)), span));
        }
        Ok(base)
    }

    fn call(&mut self) -> PResult<Ast> {
        let callee = self.atom()?;
        if matches!(self.current().kind, TokenKind::LParen) {
            self.advance();
            let mut args = Vec::new();
            if !matches!(self.current().kind, TokenKind::RParen) {
                args.push(self.expr()?);
                while matches!(self.current().kind, TokenKind::Comma) {
                    self.advance();
                    args.push(self.expr()?);
                }
            }
            let end_span = self.expect(&TokenKind::RParen, "')'")?.span;
            let span = callee.span.merge(&end_span);
            return Ok(Ast::new(
                NodeKind::Call {
                    callee: Box::new(callee),
                    args,
                },
                span,
            ));
        }
        Ok(callee)
    }

    fn atom(&mut self) -> PResult<Ast> {
        let span = self.current().span.clone();
        match self.current().kind.clone() {
            TokenKind::Int(v) => {
                self.advance();
                Ok(Ast::new(NodeKind::Int(v), span))
            }
            TokenKind::Float(v) => {
                self.advance();
                Ok(Ast::new(NodeKind::Float(v), span))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Ast::new(NodeKind::Str(s), span))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Ast::new(NodeKind::VarAccess(name), span))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.expr()?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::LSquare => self.list_literal(span),
            TokenKind::Keyword(Keyword::If) => self.if_expr(),
            TokenKind::Keyword(Keyword::For) => self.for_expr(),
            TokenKind::Keyword(Keyword::While) => self.while_expr(),
            TokenKind::Keyword(Keyword::Func) => self.func_expr(),
            _ => Err(self.expected("an expression")),
        }
    }

    fn list_literal(&mut self, start_span: crate::position::Span) -> PResult<Ast> {
        self.advance(); // '['
        let mut elements = Vec::new();
        if !matches!(self.current().kind, TokenKind::RSquare) {
            elements.push(self.expr()?);
            while matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
                elements.push(self.expr()?);
            }
        }
        let end_span = self.expect(&TokenKind::RSquare, "']'")?.span;
        Ok(Ast::new(NodeKind::List(elements), start_span.merge(&end_span)))
    }

    /// Parses either a single-statement expression-form body or a `NEWLINE ... end` block body.
    /// `closers` lists the keywords (other than `end`) that may also terminate this block, e.g.
    /// `elif`/`else` for an `if` arm.
    fn body(&mut self, closers: &[Keyword]) -> PResult<(Ast, BodyForm)> {
        if self.at_newline() {
            let mut all_closers = vec![Keyword::End];
            all_closers.extend_from_slice(closers);
            let block = self.block_body(&all_closers)?;
            Ok((block, BodyForm::Block))
        } else {
            let stmt = self.statement()?;
            Ok((stmt, BodyForm::Expression))
        }
    }

    fn if_expr(&mut self) -> PResult<Ast> {
        let start_span = self.advance().span; // 'if'
        let mut cases = Vec::new();
        let mut last_form;
        loop {
            let condition = self.expr()?;
            self.expect_keyword(Keyword::Then, "'then'")?;
            let (body, form) = self.body(&[Keyword::Elif, Keyword::Else])?;
            last_form = form;
            cases.push(IfCase {
                condition: Box::new(condition),
                body: Box::new(body),
                body_form: form,
            });
            if self.eat_keyword(Keyword::Elif) {
                continue;
            }
            break;
        }
        let mut else_branch = None;
        if self.eat_keyword(Keyword::Else) {
            let (body, form) = self.body(&[])?;
            last_form = form;
            else_branch = Some((Box::new(body), form));
        }
        let mut end_span = cases.last().unwrap().body.span.clone();
        if let Some((body, _)) = &else_branch {
            end_span = body.span.clone();
        }
        if last_form == BodyForm::Block {
            let end_tok = self.expect_keyword(Keyword::End, "'end'")?;
            end_span = end_tok.span;
        }
        Ok(Ast::new(
            NodeKind::If { cases, else_branch },
            start_span.merge(&end_span),
        ))
    }

    fn for_expr(&mut self) -> PResult<Ast> {
        let start_span = self.advance().span; // 'for'
        let var_name = self.identifier_name()?;
        self.expect(&TokenKind::Eq, "'='")?;
        let start = self.expr()?;
        self.expect_keyword(Keyword::To, "'to'")?;
        let end = self.expr()?;
        let step = if self.eat_keyword(Keyword::Step) {
            Some(Box::new(self.expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::Do, "'do'")?;
        let (body, form) = self.body(&[])?;
        let mut end_span = body.span.clone();
        if form == BodyForm::Block {
            end_span = self.expect_keyword(Keyword::End, "'end'")?.span;
        }
        Ok(Ast::new(
            NodeKind::For {
                var_name,
                start: Box::new(start),
                end: Box::new(end),
                step,
                body: Box::new(body),
                body_form: form,
            },
            start_span.merge(&end_span),
        ))
    }

    fn while_expr(&mut self) -> PResult<Ast> {
        let start_span = self.advance().span; // 'while'
        let condition = self.expr()?;
        self.expect_keyword(Keyword::Do, "'do'")?;
        let (body, form) = self.body(&[])?;
        let mut end_span = body.span.clone();
        if form == BodyForm::Block {
            end_span = self.expect_keyword(Keyword::End, "'end'")?.span;
        }
        Ok(Ast::new(
            NodeKind::While {
                condition: Box::new(condition),
                body: Box::new(body),
                body_form: form,
            },
            start_span.merge(&end_span),
        ))
    }

    fn func_expr(&mut self) -> PResult<Ast> {
        let start_span = self.advance().span; // 'func'
        let name = if let TokenKind::Identifier(n) = self.current().kind.clone() {
            self.advance();
            Some(n)
        } else {
            None
        };
        self.expect(&TokenKind::LParen, "'('")?;
        let mut arg_names = Vec::new();
        if !matches!(self.current().kind, TokenKind::RParen) {
            arg_names.push(self.identifier_name()?);
            while matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
                arg_names.push(self.identifier_name()?);
            }
        }
        self.expect(&TokenKind::RParen, "')'")?;

        if matches!(self.current().kind, TokenKind::Arrow) {
            self.advance();
            let body = self.expr()?;
            let span = start_span.merge(&body.span);
            return Ok(Ast::new(
                NodeKind::FuncDef {
                    name,
                    arg_names,
                    body: Box::new(body),
                    is_expression: true,
                },
                span,
            ));
        }

        if !self.at_newline() {
            return Err(self.expected("'->' or newline"));
        }
        let block = self.block_body(&[Keyword::End])?;
        let end_span = self.expect_keyword(Keyword::End, "'end'")?.span;
        Ok(Ast::new(
            NodeKind::FuncDef {
                name,
                arg_names,
                body: Box::new(block),
                is_expression: false,
            },
            start_span.merge(&end_span),
        ))
    }
}
