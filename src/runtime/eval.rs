use super::value::Value;
use crate::{
    diagnostic::Reporter,
    error::{ErrorKind, PResult},
    syntax::{Expression, Operator, Token, TokenKind},
};

pub(crate) struct Interpreter<'r> {
    reporter: &'r mut dyn Reporter,
}

impl<'r> Interpreter<'r> {
    pub fn new(reporter: &'r mut dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Evaluates `expr` once. A runtime error is reported and yields `None`.
    pub fn interpret(&mut self, expr: &Expression) -> Option<Value> {
        match self.eval_expr(expr) {
            Ok(value) => {
                log::debug!("evaluated to {value:?}");
                Some(value)
            }
            Err(why) => {
                self.reporter.error(&why.to_string());
                None
            }
        }
    }

    fn eval_expr(&self, expr: &Expression) -> PResult<Value> {
        match expr {
            Expression::Literal(value) => Ok(value.clone()),
            Expression::Grouping(expr) => self.eval_expr(expr),
            Expression::Unary { op, rhs } => {
                let rhs = self.eval_expr(rhs)?;
                match op.kind {
                    TokenKind::Op(Operator::Not) => Ok(Value::Boolean(!rhs.is_truthy())),
                    TokenKind::Op(Operator::Minus) => match rhs {
                        Value::Number(n) => Ok(Value::Number(-n)),
                        _ => Err(ErrorKind::runtime(op, "Operand must be a number.")),
                    },
                    // The parser only builds unary nodes for `!` and `-`.
                    other => unreachable!("unary node with operator {other:?}"),
                }
            }
            Expression::Binary { lhs, op, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                Self::eval_binary(op, lhs, rhs)
            }
            Expression::Assign { name, .. } => Err(ErrorKind::unsupported(name, "Assignment")),
        }
    }

    fn eval_binary(op: &Token, lhs: Value, rhs: Value) -> PResult<Value> {
        let op_kind = match op.kind {
            TokenKind::Op(op_kind) => op_kind,
            other => unreachable!("binary node with non-operator token {other:?}"),
        };

        match op_kind {
            Operator::Plus => match (lhs, rhs) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
                _ => Err(ErrorKind::runtime(
                    op,
                    "Operands must both be strings or numbers.",
                )),
            },
            Operator::Minus => Self::arithmetic(op, lhs, rhs, |a, b| a - b),
            Operator::Mul => Self::arithmetic(op, lhs, rhs, |a, b| a * b),
            Operator::Div => Self::arithmetic(op, lhs, rhs, |a, b| a / b),

            Operator::Gt => Self::comparison(op, lhs, rhs, |a, b| a > b),
            Operator::GtEq => Self::comparison(op, lhs, rhs, |a, b| a >= b),
            Operator::Lt => Self::comparison(op, lhs, rhs, |a, b| a < b),
            Operator::LtEq => Self::comparison(op, lhs, rhs, |a, b| a <= b),

            Operator::EqEq => Ok(Value::Boolean(lhs == rhs)),
            Operator::NotEq => Ok(Value::Boolean(lhs != rhs)),

            // `!` has no binary precedence, so the parser never folds it into a binary node.
            Operator::Not => unreachable!("binary node with operator `!`"),
        }
    }

    fn numbers(op: &Token, lhs: Value, rhs: Value) -> PResult<(f64, f64)> {
        match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok((a, b)),
            _ => Err(ErrorKind::runtime(op, "Operands must be numbers.")),
        }
    }

    fn arithmetic<F>(op: &Token, lhs: Value, rhs: Value, f: F) -> PResult<Value>
    where
        F: Fn(f64, f64) -> f64,
    {
        let (a, b) = Self::numbers(op, lhs, rhs)?;
        Ok(Value::Number(f(a, b)))
    }

    fn comparison<F>(op: &Token, lhs: Value, rhs: Value, f: F) -> PResult<Value>
    where
        F: Fn(f64, f64) -> bool,
    {
        let (a, b) = Self::numbers(op, lhs, rhs)?;
        Ok(Value::Boolean(f(a, b)))
    }
}

#[cfg(test)]
mod test {
    use super::Interpreter;
    use crate::{
        diagnostic::Recorder,
        error::ErrorKind,
        runtime::Value,
        syntax::{Expression, Lexer, Operator, Parser, Token, TokenKind},
    };

    fn eval_str(s: &str) -> Result<Value, ErrorKind> {
        let mut reporter = Recorder::default();
        let tokens = Lexer::new(s).scan_tokens(&mut reporter);
        let expr = Parser::new(tokens, &mut reporter)
            .parse()
            .expect("test source should parse");
        Interpreter::new(&mut reporter).eval_expr(&expr)
    }

    #[test]
    fn eval_arithmetic() {
        assert_eq!(eval_str("4 + 10 * -1"), Ok(Value::Number(-6.0)));
        assert_eq!(eval_str("(4 + 10) * -1"), Ok(Value::Number(-14.0)));
        assert_eq!(eval_str("-8 + 5 * (13 - 1) * -1"), Ok(Value::Number(-68.0)));
        assert_eq!(eval_str("(-8 + 5) * (13 - 1) * -1"), Ok(Value::Number(36.0)));
        assert_eq!(eval_str("10 - 4 - 3"), Ok(Value::Number(3.0)));
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(eval_str("1 / 0"), Ok(Value::Number(f64::INFINITY)));
        assert_eq!(eval_str("-1 / 0"), Ok(Value::Number(f64::NEG_INFINITY)));
        match eval_str("0 / 0") {
            Ok(Value::Number(n)) => assert!(n.is_nan()),
            other => panic!("Expected NaN, found {other:?}"),
        }
    }

    #[test]
    fn not_uses_truthiness() {
        assert_eq!(eval_str("!nil"), Ok(Value::Boolean(true)));
        assert_eq!(eval_str("!0"), Ok(Value::Boolean(false)));
        assert_eq!(eval_str("!\"\""), Ok(Value::Boolean(false)));
        assert_eq!(eval_str("!!false"), Ok(Value::Boolean(false)));
    }

    #[test]
    fn equality_never_coerces() {
        assert_eq!(eval_str("nil == nil"), Ok(Value::Boolean(true)));
        assert_eq!(eval_str("nil == false"), Ok(Value::Boolean(false)));
        assert_eq!(eval_str("1 == \"1\""), Ok(Value::Boolean(false)));
        assert_eq!(eval_str("1 != \"1\""), Ok(Value::Boolean(true)));
        assert_eq!(eval_str("\"ab\" == \"a\" + \"b\""), Ok(Value::Boolean(true)));
    }

    #[test]
    fn negate_requires_number() {
        assert_eq!(
            eval_str("-\"a\""),
            Err(ErrorKind::RuntimeError {
                line: 1,
                at: "'-'".into(),
                message: "Operand must be a number.".into(),
            })
        );
    }

    #[test]
    fn mixed_plus_is_an_error() {
        assert_eq!(
            eval_str("1 + \"a\""),
            Err(ErrorKind::RuntimeError {
                line: 1,
                at: "'+'".into(),
                message: "Operands must both be strings or numbers.".into(),
            })
        );
    }

    #[test]
    fn ordering_requires_numbers() {
        assert_eq!(
            eval_str("\"a\" > 2"),
            Err(ErrorKind::RuntimeError {
                line: 1,
                at: "'>'".into(),
                message: "Operands must be numbers.".into(),
            })
        );
        assert!(eval_str("true - 1").is_err());
        assert!(eval_str("nil * 2").is_err());
        assert!(eval_str("2 <= false").is_err());
    }

    #[test]
    fn error_points_at_failing_operator() {
        match eval_str("1 +\n(2 * nil)") {
            Err(ErrorKind::RuntimeError { line, at, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(at, "'*'");
            }
            other => panic!("Expected runtime error, found {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "binary node with operator `!`")]
    fn malformed_binary_node_is_a_bug() {
        let one = || Box::new(Expression::Literal(Value::Number(1.0)));
        let expr = Expression::Binary {
            lhs: one(),
            op: Token::new(TokenKind::Op(Operator::Not), "!", 1),
            rhs: one(),
        };

        let mut reporter = Recorder::default();
        let _ = Interpreter::new(&mut reporter).eval_expr(&expr);
    }

    #[test]
    fn assignment_is_unsupported() {
        assert_eq!(
            eval_str("a = 1"),
            Err(ErrorKind::Unsupported {
                line: 1,
                at: "'a'".into(),
                what: "Assignment".into(),
            })
        );
    }

    #[test]
    fn interpret_reports_runtime_errors() {
        let mut reporter = Recorder::default();
        let tokens = Lexer::new("true - 1").scan_tokens(&mut reporter);
        let expr = Parser::new(tokens, &mut reporter).parse().unwrap();

        assert_eq!(Interpreter::new(&mut reporter).interpret(&expr), None);
        assert_eq!(
            reporter.errors,
            vec!["Line 1: Operands must be numbers. at '-'".to_string()]
        );
    }
}
