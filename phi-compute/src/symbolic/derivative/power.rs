use crate::{
    error::{kind, Error},
    numerical::eval::Eval,
    symbolic::operator::{Binary, BinOpKind, Operator, Symbol, Unary, UnaryOpKind},
};
use super::partial;

/// Expands `(u+v)^2` into `u^2+2*u*v+v^2`, and `(u-v)^2` into `u^2-2*u*v+v^2`.
///
/// Returns [`None`] if the base is not a parenthesized sum or difference.
fn expand_binomial_square(base: &Operator) -> Option<Operator> {
    let Operator::Unary(Unary { op: UnaryOpKind::Bracket, operand }) = base.resolved() else {
        return None;
    };
    let Operator::Binary(Binary { lhs, op, rhs }) = operand.resolved() else {
        return None;
    };

    let (u, v) = (lhs.as_ref().clone(), rhs.as_ref().clone());
    let u_squared = u.clone().pow(Operator::Square);
    let v_squared = v.clone().pow(Operator::Square);
    let twice_uv = Operator::Square * u * v;

    let partial = match op {
        BinOpKind::Add => u_squared + twice_uv,
        BinOpKind::Sub => u_squared - twice_uv,
        _ => return None,
    };
    Some(partial + v_squared)
}

/// Returns the derivative of `base^exponent`.
pub fn derivative(
    base: &Operator,
    exponent: &Operator,
    symbol: Symbol,
    depth: u32,
) -> Result<Option<Operator>, Error> {
    if exponent.is_parametric_in(symbol, depth) {
        return Err(Error::spanless(kind::VariableExponent {
            symbol,
            depth,
            exponent: exponent.to_string(),
        }));
    }

    let Some(base_derivative) = partial(base, symbol, depth)? else {
        return Ok(None);
    };

    if !exponent.is_constant() {
        return Err(Error::spanless(kind::UnsupportedExponent {
            exponent: exponent.to_string(),
        }));
    }

    match exponent.resolved() {
        Operator::OneValue => return Ok(Some(base_derivative)),
        Operator::Square => {
            if let Some(expanded) = expand_binomial_square(base) {
                return expanded.derivative(symbol, depth);
            }
        },
        _ => {},
    }

    let value = exponent.eval_default();
    let coefficient = match exponent.resolved() {
        literal @ (Operator::Constant(_) | Operator::Square) => literal.clone(),
        _ => Operator::Constant(value),
    };
    Ok(Some(coefficient * base.clone().pow(Operator::Constant(value - 1.0)) * base_derivative))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{equation::Equation, error::kind::{UnsupportedExponent, VariableExponent}};
    use super::*;

    fn parse(source: &str) -> Equation {
        let mut equation = Equation::new();
        equation.parse(source).unwrap();
        equation
    }

    fn derive(source: &str, symbol: Symbol) -> Option<String> {
        parse(source).derivative(symbol, 0).unwrap().map(|d| d.to_string())
    }

    #[test]
    fn power_rule() {
        assert_eq!(derive("xi^2", Symbol::Xi).as_deref(), Some("2*xi"));
        assert_eq!(derive("2*xi^2", Symbol::Xi).as_deref(), Some("2*2*xi"));
        assert_eq!(derive("xi^3", Symbol::Xi).as_deref(), Some("3*xi^2"));
        assert_eq!(derive("xi^1", Symbol::Xi).as_deref(), Some("1"));
    }

    #[test]
    fn folded_exponent() {
        assert_eq!(derive("xi^(1/2)", Symbol::Xi).as_deref(), Some("0.5*xi^-0.5"));
        assert_eq!(derive("xi^-1", Symbol::Xi).as_deref(), Some("-1*xi^-2"));
    }

    #[test]
    fn independent_base() {
        assert_eq!(derive("mi^2", Symbol::Xi), None);
        assert_eq!(derive("mi^di", Symbol::Xi), None);
    }

    #[test]
    fn binomial_square() {
        assert_eq!(derive("-(xi-mi)^2", Symbol::Xi).as_deref(), Some("-(2*xi-2*mi)"));
        assert_eq!(derive("(xi+mi)^2", Symbol::Mi).as_deref(), Some("2*xi+2*mi"));
    }

    #[test]
    fn exponent_depends_on_target() {
        let err = parse("xi^mi").derivative(Symbol::Mi, 0).unwrap_err();
        let kind = err.downcast_ref::<VariableExponent>().unwrap();

        assert_eq!(kind.symbol, Symbol::Mi);
        assert_eq!(kind.exponent, "mi");
        assert!(err.spans.is_empty());
    }

    #[test]
    fn exponent_not_constant() {
        let err = parse("xi^mi").derivative(Symbol::Xi, 0).unwrap_err();
        assert!(err.is::<UnsupportedExponent>());
    }
}
