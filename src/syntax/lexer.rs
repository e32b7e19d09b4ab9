use std::{iter::Peekable, str::CharIndices};

use super::token::{Keyword, Operator, Token, TokenKind};
use crate::{
    diagnostic::Reporter,
    error::{ErrorKind, PResult},
    runtime::Value,
};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    line: usize,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (off, c) = self.chars.next()?;

            let kind = match c {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LCurly,
                '}' => TokenKind::RCurly,
                ',' => TokenKind::Comma,
                '.' => TokenKind::Dot,
                ';' => TokenKind::Semicolon,
                '+' => TokenKind::Op(Operator::Plus),
                '-' => TokenKind::Op(Operator::Minus),
                '*' => TokenKind::Op(Operator::Mul),
                '!' => self.either('=', Operator::NotEq, TokenKind::Op(Operator::Not)),
                '=' => self.either('=', Operator::EqEq, TokenKind::Eq),
                '<' => self.either('=', Operator::LtEq, TokenKind::Op(Operator::Lt)),
                '>' => self.either('=', Operator::GtEq, TokenKind::Op(Operator::Gt)),
                '/' => {
                    if self.eat_if('/') {
                        self.skip_line();
                        continue;
                    }
                    TokenKind::Op(Operator::Div)
                }
                ' ' | '\r' | '\t' => continue,
                '\n' => {
                    self.line += 1;
                    continue;
                }
                '"' => return Some(self.read_string(off)),
                c if c.is_ascii_digit() => return Some(self.read_number(off)),
                c if Self::is_id_start(c) => return Some(Ok(self.read_id(off))),
                other => {
                    return Some(Err(ErrorKind::LexError {
                        line: self.line,
                        message: format!("Unexpected character '{other}'."),
                    }))
                }
            };

            return Some(Ok(self.token(kind, off)));
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            line: 1,
        }
    }

    /// Scans the whole input. Lexical errors go to `reporter` and the offending
    /// text is dropped; the result always ends with a single `Eof` token.
    pub fn scan_tokens(mut self, reporter: &mut dyn Reporter) -> Vec<Token<'src>> {
        let mut tokens = vec![];

        while let Some(result) = self.next() {
            match result {
                Ok(token) => tokens.push(token),
                Err(why) => reporter.error(&why.to_string()),
            }
        }
        tokens.push(Token::eof(self.line));

        log::debug!("scanned {} tokens over {} lines", tokens.len(), self.line);
        tokens
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn offset(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(off, _)) => off,
            None => self.src.len(),
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        let _ = ahead.next();
        ahead.next().map(|(_, c)| c)
    }

    fn eat_if(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.bump();
            return true;
        }
        false
    }

    fn either(&mut self, next: char, matched: Operator, otherwise: TokenKind) -> TokenKind {
        if self.eat_if(next) {
            TokenKind::Op(matched)
        } else {
            otherwise
        }
    }

    fn token(&mut self, kind: TokenKind, from_off: usize) -> Token<'src> {
        let to_off = self.offset();
        Token::new(kind, &self.src[from_off..to_off], self.line)
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                return;
            }
            self.bump();
        }
    }

    fn skip_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                return;
            }
            self.bump();
        }
    }

    fn read_string(&mut self, from_off: usize) -> PResult<Token<'src>> {
        while let Some((off, c)) = self.chars.next() {
            match c {
                '"' => {
                    let lexeme = &self.src[from_off..off + 1];
                    let content = &self.src[from_off + 1..off];
                    return Ok(Token::with_literal(
                        TokenKind::Str,
                        lexeme,
                        Value::String(content.to_string()),
                        self.line,
                    ));
                }
                '\n' => self.line += 1,
                _ => (),
            }
        }

        Err(ErrorKind::LexError {
            line: self.line,
            message: "Unterminated string at end of input.".into(),
        })
    }

    fn read_number(&mut self, from_off: usize) -> PResult<Token<'src>> {
        self.skip_digits();

        let has_fraction = self.peek_char() == Some('.')
            && self.peek_second().map_or(false, |c| c.is_ascii_digit());
        if has_fraction {
            self.bump();
            self.skip_digits();
        }

        let to_off = self.offset();
        let lexeme = &self.src[from_off..to_off];
        let value = lexeme.parse::<f64>().map_err(|why| ErrorKind::LexError {
            line: self.line,
            message: format!("Invalid number '{lexeme}': {why}"),
        })?;

        Ok(Token::with_literal(
            TokenKind::Number,
            lexeme,
            Value::Number(value),
            self.line,
        ))
    }

    fn read_id(&mut self, from_off: usize) -> Token<'src> {
        while let Some(c) = self.peek_char() {
            if !Self::is_id_part(c) {
                break;
            }
            self.bump();
        }

        let token = self.token(TokenKind::Id, from_off);
        match Keyword::from_ident(token.lexeme) {
            Some(kw) => Token {
                kind: TokenKind::Kw(kw),
                ..token
            },
            None => token,
        }
    }

    fn is_id_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    fn is_id_part(c: char) -> bool {
        Self::is_id_start(c) || c.is_ascii_digit()
    }
}
