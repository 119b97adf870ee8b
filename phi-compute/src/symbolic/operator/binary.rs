use phi_parser::parser::{token::op::BinOpKind, Associativity};
use super::Operator;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operation, applied to two operands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the operation.
    pub lhs: Box<Operator>,

    /// The operation.
    pub op: BinOpKind,

    /// The right-hand side of the operation.
    pub rhs: Box<Operator>,
}

impl Binary {
    /// Returns true if this is a power whose base is parenthesized.
    pub fn has_bracketed_base(&self) -> bool {
        self.op == BinOpKind::Pow
            && matches!(self.lhs.resolved(), Operator::Unary(unary) if unary.is_bracket())
    }

    /// Returns true if `child` must be parenthesized to render unambiguously as an operand of
    /// this operation.
    ///
    /// Trees produced by the parser keep every grouping in explicit brackets, so this only
    /// matters for trees built by the arithmetic operators on [`Operator`].
    fn needs_parens(&self, child: &Operator, is_rhs: bool) -> bool {
        let child = match child.resolved() {
            Operator::Binary(binary) => binary,
            // `-(a)^2` would negate the power instead of raising the negation
            Operator::Unary(unary) => return self.op == BinOpKind::Pow && !is_rhs && unary.negates_group(),
            _ => return false,
        };

        let (parent, inner) = (self.op.precedence(), child.op.precedence());
        if inner < parent {
            return true;
        }

        inner == parent && match self.op.associativity() {
            Associativity::Left => is_rhs && matches!(self.op, BinOpKind::Sub | BinOpKind::Div),
            Associativity::Right => !is_rhs,
        }
    }

    /// Writes one operand of this operation.
    fn fmt_operand(&self, f: &mut fmt::Formatter, operand: &Operator, is_rhs: bool) -> fmt::Result {
        if self.needs_parens(operand, is_rhs) {
            write!(f, "({})", operand)
        } else {
            write!(f, "{}", operand)
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_operand(f, &self.lhs, false)?;
        write!(f, "{}", self.op)?;
        self.fmt_operand(f, &self.rhs, true)
    }
}
