use approx::assert_relative_eq;
use phi_compute::{
    equation::Equation,
    iteration::{gradient, Iteration},
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{operator::Symbol, Operator},
};

const TOL: f64 = 0.0001;

/// Approximates the derivative of the tree at `v` with a central finite difference, where every
/// variable takes the value `v`.
fn finite_difference(tree: &Operator, v: f64) -> f64 {
    const DX: f64 = 0.00001;
    (tree.eval(&Ctxt::new(v + DX)) - tree.eval(&Ctxt::new(v - DX))) / (2.0 * DX)
}

/// Evaluates a derivative, where [`None`] is zero.
fn eval_derivative(derivative: &Option<Operator>, v: f64) -> f64 {
    derivative.as_ref().map_or(0.0, |d| d.eval(&Ctxt::new(v)))
}

fn test_for_function(function: &'static str, points: impl IntoIterator<Item = f64>) {
    let mut equation = Equation::new();
    let tree = equation.parse(function).unwrap();
    let symbolic = equation.derivative(Symbol::Xi, 0)
        .unwrap_or_else(|_| panic!("derivative of \"{function}\" could not be computed"));

    for point in points {
        let symbolically_computed = eval_derivative(&symbolic, point);
        let numerically_computed = finite_difference(&tree, point);

        assert!(
            (symbolically_computed - numerically_computed).abs() < TOL,
            "For \"{function}\" at xi={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
        );
    }
}

#[test]
fn polynomial() {
    test_for_function("xi^2+xi+1", [0.0, 1.0, 2.0, 5.0, 8.0]);
    test_for_function("3*xi^3-xi/4", [-1.0, 0.0, 0.5, 1.5]);
}

#[test]
fn leading_minus_power() {
    test_for_function("-xi^3+2*xi", [-1.0, 0.0, 1.5]);
    test_for_function("-(xi)^3+2*xi", [-1.0, 0.0, 1.5]);
}

#[test]
fn fractional_exponent() {
    test_for_function("xi^(1/2)", [1.0, 4.0, 9.0]);
    test_for_function("xi^-2", [0.5, 1.0, 3.0]);
}

#[test]
fn quotient() {
    test_for_function("xi/(1+xi^2)", [0.0, 1.0, 2.0]);
}

#[test]
fn exponential() {
    test_for_function("exp(-xi)*xi", [0.0, 1.0, 2.5]);
    test_for_function("exp((-(xi-2)^2)/(2*3^2))", [0.5, 1.0, 2.0, 3.5]);
}

#[test]
fn constant_has_no_derivative() {
    for source in ["1", "2", "0,25", "exp(2)*3", "(1+2)^2"] {
        let mut equation = Equation::new();
        equation.parse(source).unwrap();
        for symbol in Symbol::ALL {
            assert!(equation.derivative(symbol, 0).unwrap().is_none(), "{source}");
        }
    }
}

#[test]
fn variable_has_unit_derivative() {
    for symbol in Symbol::ALL {
        let tree = Operator::variable(symbol, 0);
        assert_eq!(tree.derivative(symbol, 0).unwrap().map(|d| d.to_string()).as_deref(), Some("1"));
        assert!(tree.derivative(symbol, 1).unwrap().is_none());
    }
}

/// The sum of the partial derivatives by every variable of the tree is the derivative of the tree
/// when every variable takes the same value.
#[test]
fn gaussian_total_derivative() {
    let trees = Iteration::gaussian().chain(2, true).unwrap();

    for (iteration, tree) in trees.iter().enumerate() {
        let partials = Symbol::ALL
            .into_iter()
            .map(|symbol| gradient(tree, symbol, iteration as u32).unwrap())
            .collect::<Vec<_>>();

        for point in [1.0, 1.5, 2.0, 3.0] {
            let symbolically_computed = partials
                .iter()
                .flatten()
                .map(|(_, derivative)| eval_derivative(derivative, point))
                .sum::<f64>();
            let numerically_computed = finite_difference(tree, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "iteration {iteration} at {point}: {symbolically_computed} != {numerically_computed}",
            );
        }
    }
}

/// Rendered derivatives read back as the same function.
#[test]
fn rendered_derivative_reparses() {
    for source in [
        "1/-(xi)",
        "mi/-(xi)+0,5+mi",
        "xi/-(xi+mi)",
        "-(xi)^3*mi",
        "exp((-(xi-mi)^2)/(2*di^2))",
    ] {
        let mut equation = Equation::new();
        equation.parse(source).unwrap();

        for symbol in Symbol::ALL {
            let Some(derivative) = equation.derivative(symbol, 0).unwrap() else {
                continue;
            };
            let rendered = derivative.to_string();
            let reparsed = Equation::new()
                .parse(&rendered)
                .unwrap_or_else(|_| panic!("derivative `{rendered}` of \"{source}\" does not parse"));

            for point in [0.5, 2.0, 3.0] {
                let ctxt = Ctxt::new(point);
                assert_relative_eq!(derivative.eval(&ctxt), reparsed.eval(&ctxt), max_relative = 1e-12);
            }
        }
    }
}
