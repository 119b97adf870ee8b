//! Symbolic partial derivatives of operator trees.
//!
//! A derivative is `None` when it is exactly zero. Terms that vanish are dropped while the
//! derivative is assembled, instead of being built and simplified away afterwards.

mod power;

use crate::{
    error::Error,
    symbolic::operator::{Binary, BinOpKind, Operator, Symbol, Unary, UnaryOpKind, Variable},
};
use log::trace;

/// Returns the derivative of `operator`, or [`None`] without differentiating if `operator` does
/// not contain the variable.
fn partial(operator: &Operator, symbol: Symbol, depth: u32) -> Result<Option<Operator>, Error> {
    if operator.is_parametric_in(symbol, depth) {
        operator.derivative(symbol, depth)
    } else {
        Ok(None)
    }
}

impl Operator {
    /// Returns the partial derivative of the tree with respect to the variable with the given
    /// symbol and depth, or [`None`] if the derivative is exactly zero.
    ///
    /// Fails if the tree contains a power whose exponent depends on the variable, or whose
    /// exponent is neither constant nor independent of the variable.
    pub fn derivative(&self, symbol: Symbol, depth: u32) -> Result<Option<Operator>, Error> {
        trace!("differentiating `{}` by {}", self, Variable::new(symbol, depth));
        match self {
            Self::Constant(_) | Self::OneValue | Self::Square => Ok(None),
            Self::Variable(variable) => Ok(variable.is(symbol, depth).then_some(Self::OneValue)),
            Self::Unary(unary) => unary.derivative(symbol, depth),
            Self::Binary(binary) => binary.derivative(symbol, depth),
            Self::Functional(previous) => previous.derivative(symbol, depth),
        }
    }
}

impl Unary {
    /// Returns the derivative of the unary operation.
    pub fn derivative(&self, symbol: Symbol, depth: u32) -> Result<Option<Operator>, Error> {
        let Some(inner) = partial(&self.operand, symbol, depth)? else {
            return Ok(None);
        };

        Ok(Some(match self.op {
            UnaryOpKind::Bracket => inner,
            UnaryOpKind::Exp => Operator::Unary(self.clone()) * inner,
            UnaryOpKind::Neg => -inner,
        }))
    }
}

impl Binary {
    /// Returns the derivative of the binary operation.
    pub fn derivative(&self, symbol: Symbol, depth: u32) -> Result<Option<Operator>, Error> {
        if self.op == BinOpKind::Pow {
            return power::derivative(&self.lhs, &self.rhs, symbol, depth);
        }

        let lhs = self.lhs.as_ref();
        let rhs = self.rhs.as_ref();
        let derivatives = (partial(lhs, symbol, depth)?, partial(rhs, symbol, depth)?);

        Ok(match self.op {
            BinOpKind::Add => match derivatives {
                (None, None) => None,
                (Some(l), None) => Some(l),
                (None, Some(r)) => Some(r),
                (Some(l), Some(r)) => Some(l + r),
            },
            BinOpKind::Sub => match derivatives {
                (None, None) => None,
                (Some(l), None) => Some(l),
                (None, Some(r)) => Some(-r),
                (Some(l), Some(r)) => Some(l - r),
            },
            BinOpKind::Mul => match derivatives {
                (None, None) => None,
                (Some(l), None) => Some(l * rhs.clone()),
                (None, Some(r)) => Some(lhs.clone() * r),
                (Some(l), Some(r)) => Some(l * rhs.clone() + lhs.clone() * r),
            },
            BinOpKind::Div => {
                let numerator = match derivatives {
                    (None, None) => return Ok(None),
                    (Some(l), None) => l * rhs.clone(),
                    (None, Some(r)) => -(lhs.clone() * r),
                    (Some(l), Some(r)) => l * rhs.clone() - lhs.clone() * r,
                };
                Some(numerator / rhs.clone().pow(Operator::Square))
            },
            BinOpKind::Pow => unreachable!("powers are differentiated above"),
        })
    }
}
