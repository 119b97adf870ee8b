use crate::{
    error::{kind, Error},
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{build, operator::Symbol, Operator},
};
use log::debug;
use phi_parser::parser::reduce;
use std::sync::Arc;

/// An equation of one iteration, optionally bound to the equation of the previous iteration.
///
/// ```
/// use phi_compute::{equation::Equation, numerical::ctxt::Ctxt, symbolic::operator::Symbol};
///
/// let mut equation = Equation::new();
/// equation.parse("xi^2+mi").unwrap();
///
/// assert_eq!(equation.evaluate(&Ctxt::new(3.0)).unwrap(), 12.0);
/// let derivative = equation.derivative(Symbol::Xi, 0).unwrap().unwrap();
/// assert_eq!(derivative.to_string(), "2*xi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Equation {
    /// The tree built by the last successful parse.
    root: Option<Arc<Operator>>,

    /// The tree that `phi(i-1)` refers to.
    previous: Option<Arc<Operator>>,
}

impl Equation {
    /// Creates an equation with no previous iteration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an equation whose `phi(i-1)` refers to `previous`.
    ///
    /// If `shift` is true, the equation binds a copy of `previous` in which every variable is one
    /// iteration further into the past, and `previous` itself is left unchanged. Otherwise the
    /// tree is shared as-is.
    pub fn with_previous(previous: Arc<Operator>, shift: bool) -> Self {
        let previous = if shift {
            debug!("binding shifted copy of `{}`", previous);
            Arc::new(previous.shifted())
        } else {
            previous
        };

        Self { root: None, previous: Some(previous) }
    }

    /// Creates an equation from a tree that is already built.
    pub fn from_root(root: Arc<Operator>) -> Self {
        Self { root: Some(root), previous: None }
    }

    /// Parses the source into this equation's tree, replacing any previous tree, and returns it.
    ///
    /// On failure, the equation is left unchanged.
    pub fn parse(&mut self, source: &str) -> Result<Arc<Operator>, Vec<Error>> {
        let group = reduce(source)?;
        let root = Arc::new(build(&group, self.previous.as_ref()).map_err(|err| vec![err])?);
        debug!("built equation `{}`", root);

        self.root = Some(Arc::clone(&root));
        Ok(root)
    }

    /// Returns the tree of the equation, if it has been parsed.
    pub fn root(&self) -> Option<&Arc<Operator>> {
        self.root.as_ref()
    }

    /// Returns the tree that `phi(i-1)` refers to, if any.
    pub fn previous(&self) -> Option<&Arc<Operator>> {
        self.previous.as_ref()
    }

    /// Returns the tree of the equation, or a [`kind::NotParsed`] error.
    fn parsed_root(&self) -> Result<&Arc<Operator>, Error> {
        self.root.as_ref().ok_or_else(|| Error::spanless(kind::NotParsed))
    }

    /// Returns the partial derivative of the equation with respect to the variable with the given
    /// symbol and depth, or [`None`] if it is exactly zero.
    pub fn derivative(&self, symbol: Symbol, depth: u32) -> Result<Option<Operator>, Error> {
        self.parsed_root()?.derivative(symbol, depth)
    }

    /// Evaluates the equation in the given context.
    pub fn evaluate(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        Ok(self.parsed_root()?.eval(ctxt))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn not_parsed() {
        let equation = Equation::new();

        assert!(equation.root().is_none());
        assert!(equation.derivative(Symbol::Xi, 0).unwrap_err().is::<kind::NotParsed>());
        assert!(equation.evaluate(&Ctxt::new(1.0)).unwrap_err().is::<kind::NotParsed>());
    }

    #[test]
    fn failed_parse_keeps_tree() {
        let mut equation = Equation::new();
        equation.parse("xi").unwrap();

        assert!(equation.parse("xi+").is_err());
        assert_eq!(equation.root().map(|root| root.to_string()).as_deref(), Some("xi"));
    }

    #[test]
    fn shared_previous() {
        let previous = Arc::new(Operator::variable(Symbol::Xi, 0));
        let equation = Equation::with_previous(Arc::clone(&previous), false);

        assert!(Arc::ptr_eq(equation.previous().unwrap(), &previous));
    }

    #[test]
    fn shifted_previous() {
        let mut first = Equation::new();
        let previous = first.parse("exp(xi)*mi").unwrap();

        let mut second = Equation::with_previous(Arc::clone(&previous), true);
        let root = second.parse("phi(i-1)+di").unwrap();

        assert_eq!(previous.to_string(), "exp(xi)*mi");
        assert!(previous.is_parametric_in(Symbol::Xi, 0));
        assert_eq!(root.to_string(), "exp(x(i-1))*m(i-1)+di");
        assert!(root.is_parametric_in(Symbol::Xi, 1));
        assert!(!root.is_parametric_in(Symbol::Xi, 0));
        assert!(root.is_parametric_in(Symbol::Di, 0));
    }

    #[test]
    fn from_root() {
        let equation = Equation::from_root(Arc::new(Operator::Square));

        assert_eq!(equation.evaluate(&Ctxt::default()).unwrap(), 2.0);
        assert!(equation.derivative(Symbol::Mi, 0).unwrap().is_none());
    }
}
