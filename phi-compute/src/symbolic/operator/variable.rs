use phi_parser::parser::token::Symbol;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference to one of the symbols of an equation, some number of iterations into the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The symbol this variable refers to.
    pub symbol: Symbol,

    /// The number of iterations this variable is displaced into the past. `0` is the current
    /// iteration.
    pub depth: u32,
}

impl Variable {
    /// Creates a new variable.
    pub fn new(symbol: Symbol, depth: u32) -> Self {
        Self { symbol, depth }
    }

    /// Returns true if this variable is the unknown with the given symbol and depth.
    pub fn is(&self, symbol: Symbol, depth: u32) -> bool {
        self.symbol == symbol && self.depth == depth
    }

    /// Returns the same variable, one iteration further into the past.
    pub fn shifted(&self) -> Self {
        Self { symbol: self.symbol, depth: self.depth + 1 }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.depth == 0 {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "{}(i-{})", self.symbol.letter(), self.depth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_depth() {
        assert_eq!(Variable::new(Symbol::Xi, 0).to_string(), "xi");
        assert_eq!(Variable::new(Symbol::Mi, 1).to_string(), "m(i-1)");
        assert_eq!(Variable::new(Symbol::Di, 2).shifted().to_string(), "d(i-3)");
    }
}
