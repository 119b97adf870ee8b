use super::Operator;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    /// A parenthesized operand. The value passes through unchanged.
    Bracket,

    /// The exponential function, `exp`.
    Exp,

    /// Negation, from a leading minus.
    Neg,
}

/// A unary operation, applied to a single operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operation.
    pub op: UnaryOpKind,

    /// The operand.
    pub operand: Box<Operator>,
}

impl Unary {
    /// Returns true if this is a parenthesized operand.
    pub fn is_bracket(&self) -> bool {
        self.op == UnaryOpKind::Bracket
    }

    /// Returns true if this is a negation (possibly repeated) that renders as `-(`, that is, a
    /// negation of a parenthesized operand or of a binary operation.
    ///
    /// Followed by `^`, such a rendering would be read back as a negated power.
    pub fn negates_group(&self) -> bool {
        self.op == UnaryOpKind::Neg && match self.operand.resolved() {
            Operator::Binary(_) => true,
            Operator::Unary(inner) => inner.is_bracket() || inner.negates_group(),
            _ => false,
        }
    }

    /// Returns true if a negation of `operand` must parenthesize it to render unambiguously.
    ///
    /// A power with a parenthesized base is the only binary operand that a leading minus can
    /// cover without parentheses: `-(xi-mi)^2` negates the whole power.
    fn negation_needs_parens(operand: &Operator) -> bool {
        match operand.resolved() {
            Operator::Binary(binary) => !binary.has_bracketed_base(),
            _ => false,
        }
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op {
            UnaryOpKind::Bracket => write!(f, "({})", self.operand),
            UnaryOpKind::Exp => match self.operand.resolved() {
                Operator::Unary(inner) if inner.is_bracket() => write!(f, "exp{}", inner),
                operand => write!(f, "exp({})", operand),
            },
            UnaryOpKind::Neg => {
                if Self::negation_needs_parens(&self.operand) {
                    write!(f, "-({})", self.operand)
                } else {
                    write!(f, "-{}", self.operand)
                }
            },
        }
    }
}
