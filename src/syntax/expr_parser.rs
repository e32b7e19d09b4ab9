use crate::{
    error::{ErrorKind, PResult},
    runtime::Value,
};

use super::{
    token::{Assoc, Keyword, Operator, Precedence, TokenKind},
    ExprParser, Expression, Parser,
};

impl<'src> ExprParser<'src> for Parser<'src, '_> {
    fn parse_expr(&mut self) -> PResult<Box<Expression<'src>>> {
        let is_assign = self.peek().kind == TokenKind::Id
            && self.peek_next().map(|t| t.kind) == Some(TokenKind::Eq);

        if is_assign {
            let name = self.bump();
            self.bump();
            let value = self.parse_expr()?;
            return Ok(Box::new(Expression::Assign { name, value }));
        }

        self.parse_expr_with_precedence(1)
    }

    fn parse_expr_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> PResult<Box<Expression<'src>>> {
        let mut lhs = self.parse_expr_lhs()?;

        while let TokenKind::Op(op) = self.peek().kind {
            let (prec, assoc) = match op.get() {
                Some(binary) => binary,
                None => break,
            };

            if prec < min_prec {
                break;
            }
            let op = self.bump();

            let new_min_prec = if assoc == Assoc::Left { prec + 1 } else { prec };
            let rhs = self.parse_expr_with_precedence(new_min_prec)?;

            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        Ok(lhs)
    }

    fn parse_expr_lhs(&mut self) -> PResult<Box<Expression<'src>>> {
        match self.peek().kind {
            TokenKind::Op(Operator::Not | Operator::Minus) => self.parse_unary_expr(),
            TokenKind::LParen => self.parse_grouping_expr(),
            TokenKind::Kw(Keyword::True) => {
                self.bump();
                Ok(Box::new(Expression::Literal(Value::Boolean(true))))
            }
            TokenKind::Kw(Keyword::False) => {
                self.bump();
                Ok(Box::new(Expression::Literal(Value::Boolean(false))))
            }
            TokenKind::Kw(Keyword::Nil) => {
                self.bump();
                Ok(Box::new(Expression::Literal(Value::Nil)))
            }
            TokenKind::Number | TokenKind::Str => {
                let token = self.bump();
                let value = token.literal.unwrap_or(Value::Nil);
                Ok(Box::new(Expression::Literal(value)))
            }
            _ => Err(ErrorKind::parse(self.peek(), "Expected expression.")),
        }
    }

    fn parse_grouping_expr(&mut self) -> PResult<Box<Expression<'src>>> {
        self.expect(TokenKind::LParen, "Expected '(' before expression.")?;
        let expression = self.parse_expr()?;
        self.expect(TokenKind::RParen, "Expected ')' after expression.")?;
        Ok(Box::new(Expression::Grouping(expression)))
    }

    fn parse_unary_expr(&mut self) -> PResult<Box<Expression<'src>>> {
        let op = self.bump();
        let rhs = self.parse_expr_lhs()?;
        Ok(Box::new(Expression::Unary { op, rhs }))
    }
}
