use super::token::Token;
use crate::runtime::Value;

#[derive(Debug, PartialEq, Clone)]
pub(crate) enum Expression<'src> {
    Literal(Value),
    Grouping(Box<Expression<'src>>),
    Unary {
        op: Token<'src>,
        rhs: Box<Expression<'src>>,
    },
    Binary {
        lhs: Box<Expression<'src>>,
        op: Token<'src>,
        rhs: Box<Expression<'src>>,
    },
    /// Parsed, but there is no environment to evaluate it against.
    Assign {
        name: Token<'src>,
        value: Box<Expression<'src>>,
    },
}
