//! The operator tree of an equation.
//!
//! An [`Operator`] is immutable once built. Every transformation, such as [`Operator::shifted`] or
//! the arithmetic operators in [`ops`](crate::symbolic::ops), produces a new tree.

pub mod binary;
pub mod unary;
pub mod variable;

pub use binary::Binary;
pub use phi_parser::parser::token::{op::BinOpKind, Symbol};
pub use unary::{Unary, UnaryOpKind};
pub use variable::Variable;

use std::{fmt, sync::Arc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constants closer than this to one are treated as one by the arithmetic shortcuts, and
/// constants closer than this to an integer are rendered as that integer.
pub const TOLERANCE: f64 = 1e-6;

/// A node of an equation's operator tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// A numeric constant.
    Constant(f64),

    /// The constant 1.
    OneValue,

    /// The constant 2.
    Square,

    /// A symbol at some depth.
    Variable(Variable),

    /// A unary operation.
    Unary(Unary),

    /// A binary operation.
    Binary(Binary),

    /// The whole equation of the previous iteration, shared with the equation that produced it.
    Functional(Arc<Operator>),
}

impl Operator {
    /// Creates the constant for a number literal. The values `1` and `2` become
    /// [`Operator::OneValue`] and [`Operator::Square`].
    pub fn from_literal(value: f64) -> Self {
        if value == 1.0 {
            Self::OneValue
        } else if value == 2.0 {
            Self::Square
        } else {
            Self::Constant(value)
        }
    }

    /// Creates a variable.
    pub fn variable(symbol: Symbol, depth: u32) -> Self {
        Self::Variable(Variable::new(symbol, depth))
    }

    /// Creates a unary operation.
    pub fn unary(op: UnaryOpKind, operand: Operator) -> Self {
        Self::Unary(Unary { op, operand: Box::new(operand) })
    }

    /// Creates a binary operation.
    pub fn binary(lhs: Operator, op: BinOpKind, rhs: Operator) -> Self {
        Self::Binary(Binary { lhs: Box::new(lhs), op, rhs: Box::new(rhs) })
    }

    /// Returns the operator that this one forwards to, following [`Operator::Functional`] links.
    pub fn resolved(&self) -> &Operator {
        match self {
            Self::Functional(previous) => previous.resolved(),
            other => other,
        }
    }

    /// Returns true if this is [`Operator::OneValue`], or a constant within [`TOLERANCE`] of one.
    pub fn is_near_one(&self) -> bool {
        match self.resolved() {
            Self::OneValue => true,
            Self::Constant(value) => (1.0 - value).abs() <= TOLERANCE,
            _ => false,
        }
    }

    /// Returns true if the tree contains the variable with the given symbol and depth.
    pub fn is_parametric_in(&self, symbol: Symbol, depth: u32) -> bool {
        match self {
            Self::Constant(_) | Self::OneValue | Self::Square => false,
            Self::Variable(variable) => variable.is(symbol, depth),
            Self::Unary(unary) => unary.operand.is_parametric_in(symbol, depth),
            Self::Binary(binary) => binary.lhs.is_parametric_in(symbol, depth)
                || binary.rhs.is_parametric_in(symbol, depth),
            Self::Functional(previous) => previous.is_parametric_in(symbol, depth),
        }
    }

    /// Returns true if the tree contains no variable at all.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Constant(_) | Self::OneValue | Self::Square => true,
            Self::Variable(_) => false,
            Self::Unary(unary) => unary.operand.is_constant(),
            Self::Binary(binary) => binary.lhs.is_constant() && binary.rhs.is_constant(),
            Self::Functional(previous) => previous.is_constant(),
        }
    }

    /// Returns a copy of the tree with every variable moved one iteration further into the past.
    ///
    /// Shared previous-iteration trees are copied as well, so the result shares nothing with
    /// `self`.
    pub fn shifted(&self) -> Operator {
        match self {
            Self::Constant(_) | Self::OneValue | Self::Square => self.clone(),
            Self::Variable(variable) => Self::Variable(variable.shifted()),
            Self::Unary(unary) => Self::unary(unary.op, unary.operand.shifted()),
            Self::Binary(binary) => Self::binary(binary.lhs.shifted(), binary.op, binary.rhs.shifted()),
            Self::Functional(previous) => Self::Functional(Arc::new(previous.shifted())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant(value) => {
                let rounded = value.round();
                if (value - rounded).abs() <= TOLERANCE {
                    // adding zero turns `-0` into `0`
                    write!(f, "{}", rounded + 0.0)
                } else {
                    write!(f, "{}", value)
                }
            },
            Self::OneValue => write!(f, "1"),
            Self::Square => write!(f, "2"),
            Self::Variable(variable) => write!(f, "{}", variable),
            Self::Unary(unary) => write!(f, "{}", unary),
            Self::Binary(binary) => write!(f, "{}", binary),
            Self::Functional(previous) => write!(f, "{}", previous),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn xi() -> Operator {
        Operator::variable(Symbol::Xi, 0)
    }

    #[test]
    fn constants() {
        assert_eq!(Operator::from_literal(1.0), Operator::OneValue);
        assert_eq!(Operator::from_literal(2.0), Operator::Square);
        assert_eq!(Operator::from_literal(0.5), Operator::Constant(0.5));
        assert_eq!(Operator::Constant(3.0000001).to_string(), "3");
        assert_eq!(Operator::Constant(-0.0).to_string(), "0");
        assert_eq!(Operator::Constant(2.5).to_string(), "2.5");
        assert!(Operator::Constant(0.9999999).is_near_one());
        assert!(!Operator::Square.is_near_one());
    }

    #[test]
    fn parametric() {
        let tree = Operator::binary(xi(), BinOpKind::Mul, Operator::variable(Symbol::Mi, 1));

        assert!(tree.is_parametric_in(Symbol::Xi, 0));
        assert!(tree.is_parametric_in(Symbol::Mi, 1));
        assert!(!tree.is_parametric_in(Symbol::Mi, 0));
        assert!(!tree.is_constant());
        assert!(Operator::unary(UnaryOpKind::Neg, Operator::Square).is_constant());
    }

    #[test]
    fn shift_leaves_original_unchanged() {
        let tree = Operator::unary(UnaryOpKind::Exp, Operator::unary(UnaryOpKind::Bracket, xi()));
        let shifted = tree.shifted();

        assert_eq!(tree.to_string(), "exp(xi)");
        assert_eq!(shifted.to_string(), "exp(x(i-1))");
        assert!(shifted.is_parametric_in(Symbol::Xi, 1));
        assert!(!shifted.is_parametric_in(Symbol::Xi, 0));
    }

    #[test]
    fn render_negation() {
        let difference = Operator::binary(xi(), BinOpKind::Sub, Operator::variable(Symbol::Mi, 0));
        let power = Operator::binary(
            Operator::unary(UnaryOpKind::Bracket, difference.clone()),
            BinOpKind::Pow,
            Operator::Square,
        );

        assert_eq!(Operator::unary(UnaryOpKind::Neg, difference).to_string(), "-(xi-mi)");
        assert_eq!(Operator::unary(UnaryOpKind::Neg, power).to_string(), "-(xi-mi)^2");
        assert_eq!(Operator::unary(UnaryOpKind::Neg, xi()).to_string(), "-xi");
    }

    #[test]
    fn render_raised_negation() {
        let negated_bracket = Operator::unary(
            UnaryOpKind::Neg,
            Operator::unary(UnaryOpKind::Bracket, xi()),
        );

        let tree = negated_bracket.clone().pow(Operator::Square);
        assert_eq!(tree.to_string(), "(-(xi))^2");

        let tree = Operator::unary(UnaryOpKind::Neg, negated_bracket.clone()).pow(Operator::Square);
        assert_eq!(tree.to_string(), "(--(xi))^2");

        let tree = Operator::Functional(Arc::new(negated_bracket)).pow(Operator::Square);
        assert_eq!(tree.to_string(), "(-(xi))^2");

        let tree = Operator::unary(UnaryOpKind::Neg, xi()).pow(Operator::Square);
        assert_eq!(tree.to_string(), "-xi^2");
    }

    #[test]
    fn render_nested_binary() {
        let sum = Operator::binary(xi(), BinOpKind::Add, Operator::OneValue);
        let product = Operator::binary(Operator::Square, BinOpKind::Mul, xi());

        // lower precedence children
        let tree = Operator::binary(sum.clone(), BinOpKind::Mul, Operator::Square);
        assert_eq!(tree.to_string(), "(xi+1)*2");

        // equal precedence on the right of a non-commutative operator
        let tree = Operator::binary(xi(), BinOpKind::Sub, sum.clone());
        assert_eq!(tree.to_string(), "xi-(xi+1)");
        let tree = Operator::binary(xi(), BinOpKind::Add, sum);
        assert_eq!(tree.to_string(), "xi+xi+1");

        // power is right-associative
        let tree = Operator::binary(product.clone(), BinOpKind::Pow, Operator::Square);
        assert_eq!(tree.to_string(), "(2*xi)^2");
        let power = Operator::binary(xi(), BinOpKind::Pow, Operator::Square);
        let tree = Operator::binary(power.clone(), BinOpKind::Pow, Operator::Square);
        assert_eq!(tree.to_string(), "(xi^2)^2");
        let tree = Operator::binary(Operator::Square, BinOpKind::Pow, power);
        assert_eq!(tree.to_string(), "2^xi^2");
    }

    #[test]
    fn functional_forwards() {
        let previous = Arc::new(Operator::binary(xi(), BinOpKind::Add, Operator::OneValue));
        let tree = Operator::binary(
            Operator::Functional(Arc::clone(&previous)),
            BinOpKind::Mul,
            Operator::Square,
        );

        assert_eq!(tree.to_string(), "(xi+1)*2");
        assert!(tree.is_parametric_in(Symbol::Xi, 0));
        assert!(tree.shifted().is_parametric_in(Symbol::Xi, 1));
        assert!(previous.is_parametric_in(Symbol::Xi, 0));
    }
}
