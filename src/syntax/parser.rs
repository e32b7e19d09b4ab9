use crate::{
    diagnostic::Reporter,
    error::{ErrorKind, PResult},
    syntax::{
        printer::render,
        token::{Token, TokenKind},
        ExprParser, Expression,
    },
};

pub(crate) struct Parser<'src, 'r> {
    tokens: Vec<Token<'src>>,
    current: usize,
    reporter: &'r mut dyn Reporter,
}

impl<'src, 'r> Parser<'src, 'r> {
    pub fn new(mut tokens: Vec<Token<'src>>, reporter: &'r mut dyn Reporter) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }

        Self {
            tokens,
            current: 0,
            reporter,
        }
    }

    /// Parses exactly one expression spanning the whole input. A syntax error,
    /// including leftover tokens, is reported and yields `None`; there is no
    /// recovery, since the grammar has no statement boundaries to synchronize on.
    pub fn parse(&mut self) -> Option<Expression<'src>> {
        match self.parse_expr().and_then(|expr| self.expect_end(expr)) {
            Ok(expr) => {
                log::debug!("parsed {}", render(&expr));
                Some(*expr)
            }
            Err(why) => {
                self.reporter.error(&why.to_string());
                None
            }
        }
    }

    fn expect_end<T>(&self, parsed: T) -> PResult<T> {
        if self.at_end() {
            return Ok(parsed);
        }
        Err(ErrorKind::parse(self.peek(), "Expected end of input."))
    }

    pub(super) fn peek(&self) -> &Token<'src> {
        &self.tokens[self.current]
    }

    pub(super) fn peek_next(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.current + 1)
    }

    pub(super) fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes the current token. The trailing `Eof` is never consumed.
    pub(super) fn bump(&mut self) -> Token<'src> {
        let token = self.peek().clone();
        if !self.at_end() {
            self.current += 1;
        }
        token
    }

    pub(super) fn expect(&mut self, expected: TokenKind, message: &str) -> PResult<Token<'src>> {
        if self.peek().kind == expected {
            return Ok(self.bump());
        }
        Err(ErrorKind::parse(self.peek(), message))
    }
}
