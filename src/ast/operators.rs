use crate::ast::{Expr, Token};

/// Binary logical operators.
///
/// Both bind equally tight; see the [module docs](crate::ast) for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// Logical AND (`&`)
    And,
    /// Logical OR (`|`)
    Or,
}

impl LogicalOp {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::And => Some(LogicalOp::And),
            Token::Or => Some(LogicalOp::Or),
            _ => None,
        }
    }

    /// Builds the node combining `left` and `right` with this operator.
    pub fn join(self, left: Expr, right: Expr) -> Expr {
        match self {
            LogicalOp::And => Expr::and(left, right),
            LogicalOp::Or => Expr::or(left, right),
        }
    }
}
