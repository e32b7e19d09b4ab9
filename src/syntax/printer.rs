use super::expr::Expression;

/// Fully parenthesized rendering of an expression tree, for diagnostics.
pub(crate) fn render(expr: &Expression) -> String {
    match expr {
        Expression::Literal(value) => value.to_string(),
        Expression::Grouping(inner) => format!("({})", render(inner)),
        Expression::Unary { op, rhs } => format!("({} {})", op.lexeme, render(rhs)),
        Expression::Binary { lhs, op, rhs } => {
            format!("({} {} {})", render(lhs), op.lexeme, render(rhs))
        }
        Expression::Assign { name, value } => format!("({} = {})", name.lexeme, render(value)),
    }
}
