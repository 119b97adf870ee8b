use crate::symbolic::operator::{BinOpKind, Operator, UnaryOpKind};
use super::ctxt::Ctxt;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    ///
    /// Evaluation never fails: division by zero and similar operations produce infinities or NaN,
    /// following IEEE 754.
    fn eval(&self, ctxt: &Ctxt) -> f64;

    /// Evaluate the expression to produce a number, using the default context, which binds every
    /// variable to zero.
    fn eval_default(&self) -> f64 {
        self.eval(&Ctxt::default())
    }
}

/// Returns the numeric function applied by a unary operation.
pub fn unary_fn(op: UnaryOpKind) -> fn(f64) -> f64 {
    match op {
        UnaryOpKind::Bracket => |value| value,
        UnaryOpKind::Exp => f64::exp,
        UnaryOpKind::Neg => |value| -value,
    }
}

/// Returns the numeric function applied by a binary operation.
pub fn binary_fn(op: BinOpKind) -> fn(f64, f64) -> f64 {
    match op {
        BinOpKind::Pow => f64::powf,
        BinOpKind::Mul => |lhs, rhs| lhs * rhs,
        BinOpKind::Div => |lhs, rhs| lhs / rhs,
        BinOpKind::Add => |lhs, rhs| lhs + rhs,
        BinOpKind::Sub => |lhs, rhs| lhs - rhs,
    }
}

impl Eval for Operator {
    fn eval(&self, ctxt: &Ctxt) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::OneValue => 1.0,
            Self::Square => 2.0,
            Self::Variable(_) => ctxt.value(),
            Self::Unary(unary) => unary_fn(unary.op)(unary.operand.eval(ctxt)),
            Self::Binary(binary) => binary_fn(binary.op)(binary.lhs.eval(ctxt), binary.rhs.eval(ctxt)),
            Self::Functional(previous) => previous.eval(ctxt),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use crate::equation::Equation;
    use super::*;

    fn eval(source: &str, value: f64) -> f64 {
        let mut equation = Equation::new();
        equation.parse(source).unwrap().eval(&Ctxt::new(value))
    }

    #[test]
    fn arithmetic() {
        assert_relative_eq!(eval("1+2*3", 0.0), 7.0);
        assert_relative_eq!(eval("xi-mi-di", 1.0), -1.0);
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("0,5*4", 0.0), 2.0);
    }

    #[test]
    fn every_variable_shares_the_value() {
        assert_relative_eq!(eval("xi*mi+di", 3.0), 12.0);
    }

    #[test]
    fn leading_minus() {
        assert_relative_eq!(eval("-xi^2", 3.0), 9.0);
        assert_relative_eq!(eval("-(xi)^2", 3.0), -9.0);
    }

    #[test]
    fn gaussian() {
        let value = eval("exp((-(xi-mi)^2)/(2*di^2))", 1.5);
        assert_relative_eq!(value, 1.0);
        assert_relative_eq!(eval("exp(xi)", 1.0), std::f64::consts::E);
    }

    #[test]
    fn division_by_zero() {
        assert!(eval("1/xi", 0.0).is_infinite());
        assert!(eval("xi/xi", 0.0).is_nan());
    }
}
