//! Chains of equations, where each step refers to the one before it through `phi(i-1)`.

use crate::{
    equation::Equation,
    error::Error,
    symbolic::{operator::Symbol, Operator},
};
use log::debug;
use std::sync::Arc;

/// An iterative model: an initial equation, and a step equation that refers to the result of the
/// previous iteration with `phi(i-1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iteration {
    /// The source of the equation of the first iteration.
    initial: String,

    /// The source of the equation of every following iteration.
    step: String,
}

impl Iteration {
    /// The first iteration of the Gaussian model.
    pub const GAUSSIAN_INITIAL: &'static str = "exp((-(xi-mi)^2)/(2*di^2))";

    /// Every following iteration of the Gaussian model.
    pub const GAUSSIAN_STEP: &'static str =
        "exp((-(xi-mi)^2)/(2*di^2))+exp((-(phi(i-1)-mi)^2)/(2*di^2))";

    /// Creates a new iterative model.
    pub fn new(initial: impl Into<String>, step: impl Into<String>) -> Self {
        Self { initial: initial.into(), step: step.into() }
    }

    /// Creates the Gaussian model.
    pub fn gaussian() -> Self {
        Self::new(Self::GAUSSIAN_INITIAL, Self::GAUSSIAN_STEP)
    }

    /// Returns the source of the initial equation.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Returns the source of the step equation.
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Builds the equations of the first `iterations + 1` iterations, starting with the initial
    /// equation. Each step is bound to the tree of the one before it.
    ///
    /// If `shift` is true, the variables of every iteration are distinct from those of the
    /// previous one: the bound tree is shifted one iteration into the past. Otherwise all
    /// iterations share the same variables.
    pub fn chain(&self, iterations: usize, shift: bool) -> Result<Vec<Arc<Operator>>, Vec<Error>> {
        let mut trees = Vec::with_capacity(iterations + 1);
        let mut previous = Equation::new().parse(&self.initial)?;
        trees.push(Arc::clone(&previous));

        for i in 1..=iterations {
            previous = Equation::with_previous(previous, shift).parse(&self.step)?;
            debug!("built iteration {}", i);
            trees.push(Arc::clone(&previous));
        }

        Ok(trees)
    }
}

/// Returns the partial derivatives of the tree with respect to `symbol`, at every depth from `0`
/// to `max_depth`, inclusive.
pub fn gradient(
    root: &Operator,
    symbol: Symbol,
    max_depth: u32,
) -> Result<Vec<(u32, Option<Operator>)>, Error> {
    (0..=max_depth)
        .map(|depth| Ok((depth, root.derivative(symbol, depth)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn chain_length() {
        let trees = Iteration::gaussian().chain(2, false).unwrap();
        assert_eq!(trees.len(), 3);
        assert_eq!(trees[0].to_string(), Iteration::GAUSSIAN_INITIAL);
    }

    #[test]
    fn chain_without_shift() {
        let trees = Iteration::new("xi", "phi(i-1)*mi").chain(2, false).unwrap();
        let rendered = trees.iter().map(|tree| tree.to_string()).collect::<Vec<_>>();

        assert_eq!(rendered, vec!["xi", "xi*mi", "xi*mi*mi"]);
        assert!(!trees[2].is_parametric_in(Symbol::Xi, 1));
    }

    #[test]
    fn chain_with_shift() {
        let trees = Iteration::new("xi", "phi(i-1)*mi").chain(2, true).unwrap();
        let rendered = trees.iter().map(|tree| tree.to_string()).collect::<Vec<_>>();

        assert_eq!(rendered, vec!["xi", "x(i-1)*mi", "x(i-2)*m(i-1)*mi"]);
    }

    #[test]
    fn chain_reports_parse_errors() {
        let errors = Iteration::new("xi", "phi(i-1)+").chain(1, false).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn gradient_by_depth() {
        let trees = Iteration::new("xi", "phi(i-1)*mi").chain(2, true).unwrap();
        let gradient = gradient(&trees[2], Symbol::Mi, 2).unwrap();
        let rendered = gradient
            .iter()
            .map(|(depth, d)| (*depth, d.as_ref().map(|d| d.to_string())))
            .collect::<Vec<_>>();

        assert_eq!(rendered, vec![
            (0, Some("x(i-2)*m(i-1)".to_owned())),
            (1, Some("x(i-2)*mi".to_owned())),
            (2, None),
        ]);
    }
}
