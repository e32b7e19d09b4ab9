mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod printer;
mod token;

pub(crate) use expr::Expression;
pub(crate) use lexer::Lexer;
pub(crate) use parser::Parser;
pub(crate) use printer::render;
pub(crate) use token::{Operator, Token, TokenKind};

use crate::error::PResult;
use token::Precedence;

pub(crate) trait ExprParser<'src> {
    fn parse_expr(&mut self) -> PResult<Box<Expression<'src>>>;
    fn parse_expr_with_precedence(&mut self, min_prec: Precedence)
        -> PResult<Box<Expression<'src>>>;
    fn parse_expr_lhs(&mut self) -> PResult<Box<Expression<'src>>>;
    fn parse_grouping_expr(&mut self) -> PResult<Box<Expression<'src>>>;
    fn parse_unary_expr(&mut self) -> PResult<Box<Expression<'src>>>;
}
