//! Arithmetic on [`Operator`] trees, used to assemble derivatives.
//!
//! Multiplying by a value near one returns the other operand, and raising to a power near one
//! returns the base. No other simplification is done.

use super::operator::{BinOpKind, Operator, UnaryOpKind};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for Operator {
    type Output = Operator;

    fn add(self, rhs: Operator) -> Operator {
        Operator::binary(self, BinOpKind::Add, rhs)
    }
}

impl Sub for Operator {
    type Output = Operator;

    fn sub(self, rhs: Operator) -> Operator {
        Operator::binary(self, BinOpKind::Sub, rhs)
    }
}

impl Mul for Operator {
    type Output = Operator;

    fn mul(self, rhs: Operator) -> Operator {
        if self.is_near_one() {
            rhs
        } else if rhs.is_near_one() {
            self
        } else {
            Operator::binary(self, BinOpKind::Mul, rhs)
        }
    }
}

impl Div for Operator {
    type Output = Operator;

    fn div(self, rhs: Operator) -> Operator {
        Operator::binary(self, BinOpKind::Div, rhs)
    }
}

impl Neg for Operator {
    type Output = Operator;

    fn neg(self) -> Operator {
        Operator::unary(UnaryOpKind::Neg, self)
    }
}

impl Operator {
    /// Raises this operator to the given power.
    pub fn pow(self, exponent: Operator) -> Operator {
        if exponent.is_near_one() {
            self
        } else {
            Operator::binary(self, BinOpKind::Pow, exponent)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::symbolic::operator::Symbol;

    fn xi() -> Operator {
        Operator::variable(Symbol::Xi, 0)
    }

    #[test]
    fn multiply_by_one() {
        assert_eq!(Operator::OneValue * xi(), xi());
        assert_eq!(xi() * Operator::Constant(1.0000001), xi());
        assert_eq!((Operator::Square * xi()).to_string(), "2*xi");
    }

    #[test]
    fn power_of_one() {
        assert_eq!(xi().pow(Operator::OneValue), xi());
        assert_eq!(xi().pow(Operator::Square).to_string(), "xi^2");
    }

    #[test]
    fn no_other_shortcuts() {
        assert_eq!((xi() + Operator::Constant(0.0)).to_string(), "xi+0");
        assert_eq!((xi() / Operator::OneValue).to_string(), "xi/1");
        assert_eq!((-xi()).to_string(), "-xi");
        assert_eq!((xi() - (xi() - xi())).to_string(), "xi-(xi-xi)");
    }
}
